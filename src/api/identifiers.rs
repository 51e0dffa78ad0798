/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root every API path hangs off
pub const API_ROOT: &str = "/api";

/// Opaque identifier assigned by the server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Server-relative resource path, `/api/<collection>/<id>`.
///
/// Used both as the hyperlink in responses and as the foreign key in writes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Builds the IRI of `id` inside `collection`
    pub fn new(collection: &str, id: impl AsRef<str>) -> Self {
        Self(format!(
            "{API_ROOT}/{collection}/{}",
            urlencoding::encode(id.as_ref())
        ))
    }

    /// Wraps an IRI received from elsewhere without checking its shape
    pub fn from_raw(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The trailing path segment, which is the resource identifier
    pub fn id(&self) -> Option<Id> {
        self.segments()
            .next_back()
            .filter(|s| !s.is_empty())
            .map(|s| Id::new(urlencoding::decode(s).map_or_else(|_| s.to_string(), |d| d.into_owned())))
    }

    /// The collection segment directly under `/api/`
    pub fn collection(&self) -> Option<&str> {
        let mut segments = self.segments();
        match (segments.next(), segments.next()) {
            (Some("api"), Some(collection)) => Some(collection),
            _ => None,
        }
    }

    /// Path of a relation hanging off this resource, `/api/<collection>/<id>/<relation>`
    pub fn join(&self, relation: &str) -> String {
        format!("{}/{relation}", self.0.trim_end_matches('/'))
    }

    fn segments(&self) -> std::str::Split<'_, char> {
        self.0.trim_start_matches('/').trim_end_matches('/').split('/')
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
