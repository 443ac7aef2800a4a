//! Timing error types

use thiserror::Error;

/// Timing and segmentation errors
#[derive(Error, Debug)]
pub enum TimingError {
    /// Time text that is not `M:SS` / `MM:SS(.fff)`
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// Structured document that is not valid JSON
    #[error("Malformed timing document: {0}")]
    MalformedDocument(String),
}

impl From<serde_json::Error> for TimingError {
    fn from(err: serde_json::Error) -> Self {
        TimingError::MalformedDocument(err.to_string())
    }
}
