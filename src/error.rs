//! Error types for text normalization.

use thiserror::Error;

/// The error type for constructing a [`NormalizedText`](crate::NormalizedText).
///
/// Construction is the only fallible step; every transformation on a
/// constructed value is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The supplied input is not valid Unicode text.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

impl From<std::str::Utf8Error> for NormalizeError {
    fn from(err: std::str::Utf8Error) -> Self {
        NormalizeError::InvalidInput(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for NormalizeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        NormalizeError::InvalidInput(err.utf8_error().to_string())
    }
}
