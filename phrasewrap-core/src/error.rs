//! Core error types

use thiserror::Error;

/// Errors raised while building or loading a weight table
///
/// Segmentation itself never fails: unseen feature tokens weigh zero and
/// an empty input yields an empty phrase list.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The model document is well-formed JSON but not a usable weight table
    #[error("invalid model: {reason}")]
    InvalidModel {
        /// What was wrong with the model
        reason: String,
    },

    /// I/O error while reading a model
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error in a model
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn invalid_model(reason: impl Into<String>) -> Self {
        CoreError::InvalidModel {
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
