/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::errors::KoillectionError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token handed out by the authentication endpoint.
///
/// The session keeps it for inspection only; requests are authenticated by
/// the cookie set during login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the JWT payload. The signature is not verified.
    pub fn claims(&self) -> Result<TokenClaims, KoillectionError> {
        let payload = self
            .0
            .split('.')
            .nth(1)
            .ok_or_else(|| KoillectionError::transport("Token is not a JWT", "missing payload segment"))?;
        let raw = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| KoillectionError::transport("Failed decoding token payload", e))?;
        serde_json::from_slice(&raw)
            .map_err(|e| KoillectionError::transport("Failed parsing token claims", e))
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token").field(&"xxx").finish()
    }
}

/// Claims Koillection puts in its JWTs
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TokenClaims {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub iat: Option<i64>,

    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|t| DateTime::from_timestamp(t, 0))
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|t| DateTime::from_timestamp(t, 0))
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }
}
