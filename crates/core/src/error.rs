//! Error types for chatrisk core functionality.

use thiserror::Error;

/// Main error type for chatrisk.
#[derive(Error, Debug)]
pub enum Error {
    /// Input bytes are not valid UTF-8 text. Fatal: the whole analysis
    /// aborts, unlike unparseable lines which are silently skipped.
    #[error("Input is not valid UTF-8 text: {0}")]
    Decode(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Custom error with message.
    #[error("{0}")]
    Custom(String),
}

/// Result type for chatrisk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a custom error
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}
