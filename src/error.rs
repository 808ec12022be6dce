//! Error types for adaptive-sdr.

use thiserror::Error;

/// Encoder error types.
#[derive(Error, Debug)]
pub enum EncoderError {
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid vector dimensions
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Parameter outside its legal range
    #[error("Invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl EncoderError {
    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias for encoder operations.
pub type Result<T> = std::result::Result<T, EncoderError>;
