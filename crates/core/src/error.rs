//! Error types for the Codex
//!
//! Registry operations themselves never fail: a missing identifier is reported
//! as `None` or `false`. Errors only come from the edges of the system, parsing
//! identifiers out of strings and loading configuration.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for Codex operations
pub type Result<T> = std::result::Result<T, CodexError>;

/// Error types for the Codex
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodexError {
    /// String is not a valid identifier
    #[error("Invalid thing id: {0}")]
    InvalidId(String),

    /// Configuration could not be parsed or holds an invalid value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CodexError {
    /// Create an `InvalidConfig` error from any displayable message
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CodexError::InvalidConfig(msg.into())
    }
}

impl From<toml::de::Error> for CodexError {
    fn from(e: toml::de::Error) -> Self {
        CodexError::InvalidConfig(e.to_string())
    }
}
