/*
 * Copyright (c) 2026 The koillection-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::api::parsers::from_null_to_empty_vec;
use bytes::Bytes;
use num_enum::TryFromPrimitive;
use serde::Deserialize;
use std::io;
use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

/// Boxed underlying cause carried by transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Upper bound on the body excerpt kept for unexpected statuses
pub const MAX_EXCERPT_LEN: usize = 512;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum KoillectionError {
    #[error("Invalid input. {0}")]
    InvalidInput(ServerError),

    #[error("Unauthorized. {0}")]
    Unauthorized(ServerError),

    #[error("Not found. {0}")]
    NotFound(ServerError),

    #[error("Unprocessable entity. {0}")]
    Unprocessable(ServerError),

    #[error("Unexpected response status: {status}, body: {excerpt}")]
    UnexpectedStatus { status: u16, excerpt: String },

    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("Request cancelled: {reason}")]
    Cancelled { reason: CancelReason },

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Listing failed on page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: Box<KoillectionError>,
    },

    #[error("Session has been closed")]
    SessionClosed,
}

impl KoillectionError {
    /// Wraps an underlying failure with a message naming the stage that failed
    pub fn transport(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Annotates the error with the page a listing was fetching when it failed
    pub(crate) fn at_page(self, page: u32) -> Self {
        Self::Page {
            page,
            source: Box::new(self),
        }
    }

    /// Flat classification of this error, looking through page annotations
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Unprocessable(_) => ErrorKind::Unprocessable,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
            Self::SessionClosed => ErrorKind::SessionClosed,
            Self::Transport { .. } | Self::Io(_) | Self::UrlParsing(_) => ErrorKind::Transport,
            Self::Page { source, .. } => source.kind(),
        }
    }

    /// The server's response for the sentinel status kinds
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            Self::InvalidInput(e)
            | Self::Unauthorized(e)
            | Self::NotFound(e)
            | Self::Unprocessable(e) => Some(e),
            Self::Page { source, .. } => source.server_error(),
            _ => None,
        }
    }

    /// Parsed problem document, if the server sent one
    pub fn problem(&self) -> Option<ProblemDocument> {
        self.server_error().and_then(ServerError::problem)
    }

    /// HTTP status that produced this error, if it came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => self.server_error().map(|e| e.status),
        }
    }

    /// Page index a failed listing was on
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page { page, .. } => Some(*page),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }

    /// Maps a non-success status and its drained body to an error
    pub(crate) fn from_status(status: u16, body: Bytes) -> Self {
        match HandledStatus::try_from(status) {
            Ok(HandledStatus::BadRequest) => Self::InvalidInput(ServerError::new(status, body)),
            Ok(HandledStatus::Unauthorized) => Self::Unauthorized(ServerError::new(status, body)),
            Ok(HandledStatus::NotFound) => Self::NotFound(ServerError::new(status, body)),
            Ok(HandledStatus::UnprocessableEntity) => {
                Self::Unprocessable(ServerError::new(status, body))
            }
            _ => Self::UnexpectedStatus {
                status,
                excerpt: excerpt(&body),
            },
        }
    }
}

impl From<reqwest::Error> for KoillectionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Cancelled {
                reason: CancelReason::DeadlineExceeded,
            }
        } else if err.is_builder() {
            Self::transport("Failed building request", err)
        } else if err.is_decode() {
            Self::transport("Failed reading response body", err)
        } else {
            Self::transport("Request network error", err)
        }
    }
}

/// Flat tag for the caller-observable error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum ErrorKind {
    InvalidInput,
    Unauthorized,
    NotFound,
    Unprocessable,
    UnexpectedStatus,
    Transport,
    Cancelled,
    SessionClosed,
}

/// Why a request was abandoned before completing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CancelReason {
    #[strum(to_string = "context cancelled")]
    Cancelled,
    #[strum(to_string = "deadline exceeded")]
    DeadlineExceeded,
}

/// Status codes the session treats specially
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u16)]
pub(crate) enum HandledStatus {
    Ok = 200,
    Created = 201,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    NotFound = 404,
    UnprocessableEntity = 422,
}

impl HandledStatus {
    pub(crate) fn is_success(status: u16) -> bool {
        matches!(
            HandledStatus::try_from(status),
            Ok(HandledStatus::Ok | HandledStatus::Created | HandledStatus::NoContent)
        )
    }
}

/// Raw server rejection: the status code and the verbatim response body
#[derive(Debug, Clone)]
pub struct ServerError {
    pub status: u16,
    pub body: Bytes,
}

impl ServerError {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Parses the body as a problem document. Returns `None` for bodies that
    /// are not JSON objects.
    pub fn problem(&self) -> Option<ProblemDocument> {
        serde_json::from_slice::<ProblemDocument>(&self.body).ok()
    }

    /// Body as text, lossily decoded
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.problem() {
            Some(p) => {
                let summary = p
                    .detail
                    .as_deref()
                    .or(p.description())
                    .or(p.title())
                    .unwrap_or_default();
                write!(f, "status: {}, {}", self.status, summary)
            }
            None => write!(f, "status: {}", self.status),
        }
    }
}

/// Structured error body returned by the server
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDocument {
    #[serde(default)]
    pub status: Option<u16>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, rename = "hydra:title")]
    pub hydra_title: Option<String>,

    #[serde(default)]
    pub detail: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, rename = "hydra:description")]
    pub hydra_description: Option<String>,

    /// Either a context IRI or an inline context object
    #[serde(default, rename = "@context")]
    pub context: Option<serde_json::Value>,

    #[serde(default, rename = "@id")]
    pub id: Option<String>,

    #[serde(default, rename = "type")]
    pub type_uri: Option<String>,

    #[serde(default)]
    pub instance: Option<String>,

    #[serde(default, deserialize_with = "from_null_to_empty_vec")]
    pub violations: Vec<Violation>,
}

impl ProblemDocument {
    /// `title`, or `hydra:title` from servers that only send the Hydra form
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().or(self.hydra_title.as_deref())
    }

    /// `description`, or `hydra:description` from servers that only send the
    /// Hydra form
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .or(self.hydra_description.as_deref())
    }
}

/// One rejected field inside a problem document
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub property_path: String,
    pub message: String,

    #[serde(default)]
    pub code: Option<String>,
}

// Cuts the body to MAX_EXCERPT_LEN bytes without splitting a UTF-8 sequence
fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_EXCERPT_LEN {
        return text.into_owned();
    }
    let mut end = MAX_EXCERPT_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_statuses_map_to_sentinels() {
        let cases = [
            (400, ErrorKind::InvalidInput),
            (401, ErrorKind::Unauthorized),
            (404, ErrorKind::NotFound),
            (422, ErrorKind::Unprocessable),
            (500, ErrorKind::UnexpectedStatus),
            (403, ErrorKind::UnexpectedStatus),
        ];
        for (status, kind) in cases {
            let err = KoillectionError::from_status(status, Bytes::new());
            assert_eq!(err.kind(), kind, "status {status}");
            assert_eq!(err.status(), Some(status));
        }
    }

    #[test]
    fn success_statuses() {
        assert!(HandledStatus::is_success(200));
        assert!(HandledStatus::is_success(201));
        assert!(HandledStatus::is_success(204));
        assert!(!HandledStatus::is_success(202));
        assert!(!HandledStatus::is_success(404));
    }

    #[test]
    fn unexpected_status_excerpt_is_bounded() {
        let body = "é".repeat(MAX_EXCERPT_LEN);
        let err = KoillectionError::from_status(503, Bytes::from(body));
        match err {
            KoillectionError::UnexpectedStatus { status, excerpt } => {
                assert_eq!(status, 503);
                assert!(excerpt.len() <= MAX_EXCERPT_LEN);
                assert!(excerpt.chars().all(|c| c == 'é'));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn problem_document_with_violations() {
        let body = r#"{
            "@context": "/api/contexts/ConstraintViolationList",
            "@id": "/api/validation_errors/abc",
            "@type": "ConstraintViolationList",
            "status": 422,
            "hydra:title": "An error occurred",
            "detail": "currency: This value is not a valid currency.",
            "hydra:description": "currency: This value is not a valid currency.",
            "type": "/validation_errors/abc",
            "violations": [
                {"propertyPath": "currency", "message": "This value is not a valid currency.", "code": "abc"}
            ]
        }"#;
        let err = KoillectionError::from_status(422, Bytes::from(body));
        let problem = err.problem().unwrap();
        assert_eq!(problem.status, Some(422));
        assert_eq!(problem.title(), Some("An error occurred"));
        assert_eq!(
            problem.context,
            Some(serde_json::json!("/api/contexts/ConstraintViolationList"))
        );
        assert_eq!(problem.id.as_deref(), Some("/api/validation_errors/abc"));
        assert_eq!(problem.type_uri.as_deref(), Some("/validation_errors/abc"));
        assert_eq!(problem.violations.len(), 1);
        assert_eq!(problem.violations[0].property_path, "currency");
        assert!(err.to_string().contains("not a valid currency"));
    }

    #[test]
    fn plain_and_hydra_keys_together() {
        let body = r#"{
            "@context": "/api/contexts/ConstraintViolationList",
            "@type": "ConstraintViolationList",
            "status": 422,
            "title": "An error occurred",
            "hydra:title": "An error occurred",
            "description": "name: This value should not be blank.",
            "hydra:description": "name: This value should not be blank.",
            "violations": [
                {"propertyPath": "name", "message": "This value should not be blank."}
            ]
        }"#;
        let err = KoillectionError::from_status(422, Bytes::from(body));
        let problem = err.problem().unwrap();
        assert_eq!(problem.title(), Some("An error occurred"));
        assert_eq!(problem.description(), Some("name: This value should not be blank."));
        assert_eq!(problem.violations[0].property_path, "name");
        assert!(err.to_string().contains("should not be blank"));
    }

    #[test]
    fn hydra_only_keys_and_null_violations() {
        let body = r#"{
            "@context": {"@vocab": "http://www.w3.org/ns/hydra/core#"},
            "hydra:title": "An error occurred",
            "hydra:description": "Item not found",
            "violations": null
        }"#;
        let problem = KoillectionError::from_status(404, Bytes::from(body))
            .problem()
            .unwrap();
        assert_eq!(problem.title(), Some("An error occurred"));
        assert_eq!(problem.description(), Some("Item not found"));
        assert!(problem.context.unwrap().is_object());
        assert!(problem.violations.is_empty());
    }

    #[test]
    fn raw_body_is_kept_when_not_a_problem_document() {
        let err = KoillectionError::from_status(400, Bytes::from_static(b"<html>bad</html>"));
        assert!(err.problem().is_none());
        assert_eq!(err.server_error().unwrap().body_text(), "<html>bad</html>");
    }

    #[test]
    fn page_annotation_is_transparent_to_kind() {
        let err = KoillectionError::Cancelled {
            reason: CancelReason::Cancelled,
        }
        .at_page(2);
        assert_eq!(err.kind(), ErrorKind::Cancelled);
        assert_eq!(err.page(), Some(2));
        assert!(err.is_cancelled());
    }
}
