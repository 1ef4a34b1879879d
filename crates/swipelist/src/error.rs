//! Error types for swipelist.
//!
//! Runtime list operations never fail: stale lookups and redundant
//! transitions are absorbed as no-ops. Only loading and validating a
//! [`SwipeConfig`](crate::SwipeConfig) can produce an [`Error`].

use std::path::PathBuf;

/// Result type alias for swipelist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a list configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Error {
    /// Create an invalid-configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
