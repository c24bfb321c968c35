//! Tool-specific error types.

use thiserror::Error;

use super::contract::ValidationError;
use crate::core::api::ApiError;

/// Errors that can occur during tool operations.
///
/// Inside an invocation every variant ends up rendered into an error
/// envelope. `NotFound` and `DuplicateName` are raised outside invocations
/// (unknown tool name, registry construction).
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Two definitions share a name.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// Arguments failed the tool's parameter contract.
    #[error("Invalid arguments: {0}")]
    Validation(#[from] ValidationError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Coarse error classes used for logging and message shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Backend,
    Internal,
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Api(_) => ErrorKind::Backend,
            Self::NotFound(_) | Self::DuplicateName(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}
