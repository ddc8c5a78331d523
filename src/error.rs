use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// ErrorBody
///
/// The error payload the backend sends alongside a non-2xx status. Both fields are
/// optional; some routes reply with an empty body or plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Parses an error response body, tolerating non-JSON text.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) => Self {
                message: value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
                details: value.get("details").and_then(|d| match d {
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Null => None,
                    other => Some(other.to_string()),
                }),
            },
            Err(_) if !raw.trim().is_empty() => Self {
                message: Some(raw.trim().to_string()),
                details: None,
            },
            Err(_) => Self::default(),
        }
    }

    /// "message: details", or just the message, or `fallback` when there is none.
    pub fn describe(&self, fallback: &str) -> String {
        let message = self.message.as_deref().unwrap_or(fallback);
        match self.details.as_deref() {
            Some(details) => format!("{}: {}", message, details),
            None => message.to_string(),
        }
    }
}

/// StorageError
///
/// Failures of the local key/value store that holds the token and cached user.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("local storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// ErrorKind
///
/// The four error classes callers react to differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 401/403 or a request outliving its session. A forced logout already happened.
    Auth,
    /// A 4xx the backend explained. Show its message near the form.
    Validation,
    /// 5xx, offline, timeout. Show a generic "failed to load/save" message.
    Unavailable,
    /// The payload did not have the expected shape.
    Malformed,
}

/// ApiError
///
/// Every failure a resource call can return. The HTTP client classifies the
/// response status; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the credential (401) or the permission (403).
    #[error("not authorized ({status})")]
    Unauthorized { status: StatusCode, body: ErrorBody },

    /// The request carried a session that was ended while it was in flight.
    #[error("session ended while the request was in flight")]
    SessionEnded,

    /// Any other 4xx response.
    #[error("request rejected ({status}): {}", .body.describe("no message"))]
    Rejected { status: StatusCode, body: ErrorBody },

    /// 5xx response.
    #[error("server error ({status}): {}", .body.describe("no message"))]
    Server { status: StatusCode, body: ErrorBody },

    /// Connection, DNS, TLS or timeout failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be mapped onto the expected model.
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Builds the error for a non-success status and its raw body.
    pub fn from_status(status: StatusCode, raw_body: &str) -> Self {
        let body = ErrorBody::parse(raw_body);
        match status.as_u16() {
            401 | 403 => ApiError::Unauthorized { status, body },
            400..=499 => ApiError::Rejected { status, body },
            _ => ApiError::Server { status, body },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized { .. } | ApiError::SessionEnded => ErrorKind::Auth,
            ApiError::Rejected { .. } => ErrorKind::Validation,
            ApiError::Server { .. } | ApiError::Network(_) | ApiError::Storage(_) => {
                ErrorKind::Unavailable
            }
            ApiError::Decode(_) => ErrorKind::Malformed,
        }
    }

    /// HTTP status of the response, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized { status, .. }
            | ApiError::Rejected { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// The error body the backend sent, if any.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Unauthorized { body, .. }
            | ApiError::Rejected { body, .. }
            | ApiError::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Text to show the user.
    ///
    /// Validation errors surface the backend's own message (plus details). Every
    /// other class shows `fallback`, the caller's generic "failed to load/save" text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { body, .. } => body.describe(fallback),
            ApiError::Unauthorized { body, .. } => body
                .message
                .clone()
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}
