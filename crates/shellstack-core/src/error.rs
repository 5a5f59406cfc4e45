//! Error types for shellstack.

use thiserror::Error;

/// The main error type for shellstack core operations.
#[derive(Error, Debug)]
pub enum ShellstackError {
    /// The configuration cannot produce meaningful output.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for shellstack core operations.
pub type Result<T> = std::result::Result<T, ShellstackError>;
