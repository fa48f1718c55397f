//! Error types for clinvar-lookup.
//!
//! Only request-level failures are represented here. Validator rejections are
//! carried as data in [`crate::ValidationResult`], a zero-hit ClinVar search
//! is an empty `Vec`, and field-level anomalies inside a record degrade to
//! `None` at the extraction boundary rather than becoming errors.

use thiserror::Error;

/// Main error type for clinvar-lookup operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Network or service unreachable (connect failure, timeout, HTTP error status).
    #[error("transport failure: {msg}")]
    Transport { msg: String },

    /// The remote service answered, but the body was not the expected JSON shape.
    #[error("unexpected response: {msg}")]
    UnexpectedResponse { msg: String },

    /// Local IO error (log files, stdin).
    #[error("IO error: {msg}")]
    Io { msg: String },
}

impl LookupError {
    /// Create a transport error from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        LookupError::Transport {
            msg: cause.to_string(),
        }
    }

    /// Create an unexpected-response error from any displayable cause.
    pub fn unexpected(cause: impl std::fmt::Display) -> Self {
        LookupError::UnexpectedResponse {
            msg: cause.to_string(),
        }
    }
}

impl From<std::io::Error> for LookupError {
    fn from(e: std::io::Error) -> Self {
        LookupError::Io { msg: e.to_string() }
    }
}
