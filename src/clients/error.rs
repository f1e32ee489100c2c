//! Error types for the HTTP clients.

use serde::Deserialize;
use thiserror::Error;

/// The JSON envelope the backend services return on failure:
/// `{"timestamp": .., "status": 404, "error": "Inventory Not Found", "message": .., "path": ..}`.
///
/// Bodies that are not in this shape are kept verbatim in `raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: Option<u16>,
    pub error: Option<String>,
    pub message: Option<String>,
    pub raw: String,
}

#[derive(Deserialize)]
struct Envelope {
    status: Option<u16>,
    error: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    pub fn parse(raw: &str) -> Self {
        let envelope = serde_json::from_str::<Envelope>(raw).ok();
        let (status, error, message) = match envelope {
            Some(e) => (e.status, e.error, e.message),
            None => (None, None, None),
        };
        Self {
            status,
            error,
            message: message.filter(|m| !m.trim().is_empty()),
            raw: raw.to_string(),
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            raw: message.clone(),
            message: Some(message),
            ..Self::default()
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.message, self.raw.is_empty()) {
            (Some(message), _) => write!(f, "{message}"),
            (None, false) => write!(f, "{}", self.raw),
            (None, true) => write!(f, "<empty body>"),
        }
    }
}

/// Errors that can occur while talking to the backend endpoints.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// 404: no such product or no inventory row for it.
    #[error("Not found: {0}")]
    NotFound(ErrorBody),

    /// 400: the server rejected the request, e.g. a validation failure.
    #[error("Bad request: {0}")]
    BadRequest(ErrorBody),

    /// 409: the request conflicts with current state, e.g. insufficient stock.
    #[error("Conflict: {0}")]
    Conflict(ErrorBody),

    /// 5xx.
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: ErrorBody },

    /// Any other non-2xx status.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: ErrorBody },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: ErrorBody) -> Self {
        match status {
            400 => ApiError::BadRequest(body),
            404 => ApiError::NotFound(body),
            409 => ApiError::Conflict(body),
            500..=599 => ApiError::Server { status, body },
            _ => ApiError::UnexpectedStatus { status, body },
        }
    }

    pub(crate) fn transport(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::BadRequest(_) => Some(400),
            ApiError::Conflict(_) => Some(409),
            ApiError::Server { status, .. } | ApiError::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::NotFound(body)
            | ApiError::BadRequest(body)
            | ApiError::Conflict(body)
            | ApiError::Server { body, .. }
            | ApiError::UnexpectedStatus { body, .. } => Some(body),
            ApiError::Transport(_) | ApiError::Decode(_) => None,
        }
    }

    /// The human-readable `message` the server put in its error envelope.
    pub fn server_message(&self) -> Option<&str> {
        self.body().and_then(|b| b.message.as_deref())
    }

    /// True for rejections of the request itself (400 and 409) rather than failures.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::BadRequest(_) | ApiError::Conflict(_))
    }
}
