//! Backend API error types.

use thiserror::Error;

/// Result type for dispatcher operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while talking to the test-management backend.
///
/// A "nothing found" answer is not an error: the dispatcher reports it as
/// an [`ApiReply`](super::ApiReply) and the tool layer decides how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered 2xx but the payload was not valid JSON.
    #[error("Invalid response payload: {0}")]
    Decode(String),

    /// The configured base URL or the request path could not form a URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request could not be encoded (query string or body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Create a status error.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Short classification used in logs.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Status { status, .. } if *status >= 500 => "server",
            Self::Status { .. } => "client",
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
            Self::InvalidUrl(_) | Self::InvalidRequest(_) => "request",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Transport(format!("Request timed out: {e}"))
        } else if e.is_connect() {
            Self::Transport(format!("Connection failed: {e}"))
        } else if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
