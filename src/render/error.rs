//! Render error types

use thiserror::Error;

/// Errors that can occur while producing dashboard output
#[derive(Error, Debug)]
pub enum RenderError {
    /// Marker data or table could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// CSV writer failed
    #[error("CSV error: {0}")]
    Csv(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        RenderError::Csv(err.to_string())
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
