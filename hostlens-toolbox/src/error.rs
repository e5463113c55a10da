//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Toolbox error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ToolboxError {
    /// Invalid input (empty endpoint, unusable target, etc.)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Transport-level failure (connection refused, DNS failure, gateway errors)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The request exceeded its deadline
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The body was not JSON or did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The server answered with an empty body
    #[error("Empty response from {0}")]
    EmptyResponse(String),

    /// The host page did not contain a CSRF token
    #[error("CSRF token not found")]
    TokenNotFound,
}

impl ToolboxError {
    /// Whether the error is an expected outcome rather than a fault.
    ///
    /// Callers log expected errors at `warn` and the rest at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::EmptyResponse(_) | Self::TokenNotFound
        )
    }
}

/// Toolbox Result type alias
pub type ToolboxResult<T> = std::result::Result<T, ToolboxError>;
