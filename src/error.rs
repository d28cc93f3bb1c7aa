//! Crate-wide error type.
//!
//! The extraction engine itself is total and never surfaces errors; this
//! type covers the CLI boundary (reading input, writing output, serializing
//! reports).

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, McqxError>;

#[derive(Debug, Error)]
pub enum McqxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
