//! Error types for authentication-flow operations.

use std::io;

/// Result type alias for authentication-flow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Authentication-flow error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The extracted sign-in result is missing a required field.
    #[error("Sign-in result is missing required field: {0}")]
    MissingField(&'static str),
}
