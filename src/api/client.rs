/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::context::Context;
use crate::api::errors::{HandledStatus, KoillectionError};
use crate::api::hydra::{HydraCollection, JSON_LD, is_json_ld};
use crate::api::identifiers::API_ROOT;
use crate::api::token::Token;
use async_stream::try_stream;
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use log::{debug, info, trace, warn};
use reqwest::cookie::Jar;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use strum_macros::{Display, IntoStaticStr};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TEXT_PLAIN: &str = "text/plain";
const AUTH_PATH: &str = "/api/authentication_token";
const METRICS_PATH: &str = "/api/metrics";
const UPLOAD_PART_NAME: &str = "file";

/// Settings a [`Client`] is created from
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("koillection-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum SessionState {
    Fresh,
    Authenticated,
    Closed,
}

/// Session with a Koillection server.
///
/// Owns the HTTP stack and the cookie jar the server's login cookie lands in.
/// Clones share all of it, so a `Client` can be handed to concurrent tasks.
/// The cookie jar and HTTP stack are internally synchronised; the only other
/// shared state is the retained token, which only [`Client::login`] writes.
/// Don't run `login` concurrently with itself on the same session.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: String,
    http: reqwest::Client,
    cookies: Arc<Jar>,
    token: RwLock<Option<Token>>,
    closed: AtomicBool,
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("base_url", &self.base_url)
            .field("token", &"xxx")
            .field("closed", &self.closed)
            .finish()
    }
}

/// Body of an outgoing request
pub(crate) enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(Form),
}

// Drained response of a successful exchange
struct RawResponse {
    content_type: Option<String>,
    body: Bytes,
}

impl Client {
    /// Creates a session for `base_url` with a global per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, KoillectionError> {
        Self::with_config(ClientConfig::new(base_url).timeout(timeout))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, KoillectionError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let cookies = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(cookies.clone())
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                base_url,
                http,
                cookies,
                token: RwLock::new(None),
                closed: AtomicBool::new(false),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The cookie jar requests are authenticated with
    pub fn cookies(&self) -> Arc<Jar> {
        self.inner.cookies.clone()
    }

    /// Token retained from the last successful login
    pub fn token(&self) -> Option<Token> {
        self.inner
            .token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn state(&self) -> SessionState {
        if self.inner.closed.load(Ordering::Acquire) {
            SessionState::Closed
        } else if self.token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Fresh
        }
    }

    /// Closes the session for every clone; later operations fail with
    /// [`KoillectionError::SessionClosed`]
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Release);
    }

    /// Authenticates with the server. The login cookie the server sets is kept
    /// in the jar and carries the credentials of every later request.
    pub async fn login(
        &self,
        ctx: &Context,
        username: &str,
        password: &str,
    ) -> Result<Token, KoillectionError> {
        let credentials = Credentials { username, password };
        let resp: TokenResponse = self.post(ctx, AUTH_PATH, &credentials).await?;
        let token = Token::new(resp.token);
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(|e| e.into_inner()) = Some(token.clone());
        info!("Authenticated with {}", self.inner.base_url);
        Ok(token)
    }

    /// Server metrics as a flat map
    pub async fn metrics(&self, ctx: &Context) -> Result<BTreeMap<String, String>, KoillectionError> {
        let resp = self
            .execute(ctx, Method::GET, METRICS_PATH, None, RequestBody::Empty, TEXT_PLAIN)
            .await?;
        decode(&resp.body, "metrics")
    }

    /// Retrieves the single resource at `path`
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<T, KoillectionError> {
        let resp = self
            .execute(ctx, Method::GET, path, None, RequestBody::Empty, JSON_LD)
            .await?;
        decode(&resp.body, path)
    }

    /// Retrieves one page of the collection at `path`
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        page: u32,
    ) -> Result<Vec<T>, KoillectionError> {
        let resp = self
            .execute(ctx, Method::GET, path, Some(page.max(1)), RequestBody::Empty, JSON_LD)
            .await?;
        if is_json_ld(resp.content_type.as_deref()) {
            decode::<HydraCollection<T>>(&resp.body, path).map(|c| c.member)
        } else {
            decode(&resp.body, path)
        }
    }

    /// Lazily walks the collection at `path` page by page, stopping at the
    /// first empty page. Errors carry the page index that failed.
    pub fn stream<'a, T>(
        &'a self,
        ctx: &'a Context,
        path: String,
    ) -> impl Stream<Item = Result<T, KoillectionError>> + Send + 'a
    where
        T: DeserializeOwned + Send + 'a,
    {
        try_stream! {
            let mut page: u32 = 1;
            loop {
                let members = self
                    .get_page::<T>(ctx, &path, page)
                    .await
                    .map_err(|e| e.at_page(page))?;
                if members.is_empty() {
                    break;
                }
                for member in members {
                    yield member;
                }
                page += 1;
            }
        }
    }

    /// Every member of the collection at `path`, pages concatenated in order
    pub async fn get_all<T>(&self, ctx: &Context, path: &str) -> Result<Vec<T>, KoillectionError>
    where
        T: DeserializeOwned + Send,
    {
        self.stream(ctx, path.to_string()).try_collect().await
    }

    pub async fn post<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        payload: &P,
    ) -> Result<T, KoillectionError> {
        self.send_json(ctx, Method::POST, path, payload).await
    }

    pub async fn put<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        payload: &P,
    ) -> Result<T, KoillectionError> {
        self.send_json(ctx, Method::PUT, path, payload).await
    }

    pub async fn patch<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        payload: &P,
    ) -> Result<T, KoillectionError> {
        self.send_json(ctx, Method::PATCH, path, payload).await
    }

    pub async fn delete(&self, ctx: &Context, path: &str) -> Result<(), KoillectionError> {
        self.execute(ctx, Method::DELETE, path, None, RequestBody::Empty, JSON_LD)
            .await
            .map(|_| ())
    }

    /// Uploads `data` as the single `file` part of a multipart form
    pub async fn upload<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        data: Vec<u8>,
    ) -> Result<T, KoillectionError> {
        trace!("Uploading {} bytes to {path}", data.len());
        let part = Part::bytes(data)
            .file_name(UPLOAD_PART_NAME)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part(UPLOAD_PART_NAME, part);
        let resp = self
            .execute(ctx, Method::POST, path, None, RequestBody::Multipart(form), JSON_LD)
            .await?;
        decode(&resp.body, path)
    }

    /// Reads `file` into memory and uploads it
    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        file: impl AsRef<Path>,
    ) -> Result<T, KoillectionError> {
        let data = tokio::fs::read(file.as_ref()).await?;
        self.upload(ctx, path, data).await
    }

    async fn send_json<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<T, KoillectionError> {
        let data = serde_json::to_vec(payload)
            .map_err(|e| KoillectionError::transport("Failed serializing request body", e))?;
        let resp = self
            .execute(ctx, method, path, None, RequestBody::Json(data), JSON_LD)
            .await?;
        decode(&resp.body, path)
    }

    /// Builds the request, sends it under the context, checks the status and
    /// drains the body on both success and failure.
    async fn execute(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        page: Option<u32>,
        body: RequestBody,
        accept: &str,
    ) -> Result<RawResponse, KoillectionError> {
        if self.inner.closed.load(Ordering::Acquire) {
            return Err(KoillectionError::SessionClosed);
        }
        let url = self.url(path, page)?;
        debug!("{method} {url}");

        let mut req = self
            .inner
            .http
            .request(method, url)
            .header(ACCEPT, accept);
        req = match body {
            RequestBody::Empty => req,
            RequestBody::Json(data) => {
                trace!("JSON body: {} bytes", data.len());
                req.header(CONTENT_TYPE, JSON_LD).body(data)
            }
            RequestBody::Multipart(form) => req.multipart(form),
        };

        ctx.run(async move {
            let resp = req.send().await?;
            let status = resp.status().as_u16();
            let content_type = resp
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body = resp.bytes().await?;
            trace!("Response {status}: {} bytes", body.len());

            if !HandledStatus::is_success(status) {
                warn!("Request to {path} failed with status {status}");
                return Err(KoillectionError::from_status(status, body));
            }
            Ok(RawResponse { content_type, body })
        })
        .await
    }

    fn url(&self, path: &str, page: Option<u32>) -> Result<Url, KoillectionError> {
        if !path.starts_with(API_ROOT) {
            return Err(KoillectionError::transport(
                format!("Path must be under {API_ROOT}"),
                format!("invalid request path {path:?}"),
            ));
        }
        let url = format!("{}{path}", self.inner.base_url);
        Ok(match page {
            Some(page) => Url::parse_with_params(&url, &[("page", page.to_string())])?,
            None => Url::parse(&url)?,
        })
    }
}

fn decode<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, KoillectionError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("Api Malformed response for {what}: {e}");
        KoillectionError::transport(format!("Failed decoding response for {what}"), e)
    })
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

// Expected response from the authentication endpoint
#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}
