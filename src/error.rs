//! Custom error types for FilamentCLI
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for FilamentCLI operations
#[derive(Error, Debug)]
pub enum FilamentError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Caller supplied a value outside its allowed range
    #[error("Validation error: {0}")]
    Validation(String),

    /// A non-blank inventory line could not be parsed
    #[error("Malformed record on line {line} ({reason}): {content:?}")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    /// The warning level file does not hold a non-negative integer
    #[error("Invalid warning level: {0:?}")]
    InvalidThreshold(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FilamentError {
    /// Create a malformed record error
    pub fn malformed(line: usize, content: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a malformed record error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }
}

impl From<std::io::Error> for FilamentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FilamentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FilamentCLI operations
pub type FilamentResult<T> = Result<T, FilamentError>;
