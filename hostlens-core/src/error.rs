//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use hostlens_toolbox::ToolboxError;

/// Core layer error type
///
/// Lane failures never surface here; they become status-tagged view models.
/// These errors cover setup and the event loop itself.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The runtime's message channel is gone
    #[error("Panel runtime channel closed")]
    ChannelClosed,

    /// Toolbox error (converting from library)
    #[error("{0}")]
    Toolbox(#[from] ToolboxError),
}

impl CoreError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ConfigError(_) => true,
            Self::ChannelClosed => false,
            Self::Toolbox(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
