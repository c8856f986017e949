//! Error types for schema inference

use thiserror::Error;

/// Errors that can occur during schema inference
///
/// Classification and aggregation are total over any JSON input; the only
/// fatal condition is ending a pass with nothing to resolve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InferenceError {
    /// No documents were supplied, or no field could be resolved from them
    #[error("no fields could be resolved from the supplied documents")]
    EmptySchema,

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for InferenceError {
    fn from(e: serde_json::Error) -> Self {
        InferenceError::JsonParse(e.to_string())
    }
}
