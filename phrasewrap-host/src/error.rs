//! Layered error types
//!
//! Host errors wrap core errors so callers can use a single `Result`.

use phrasewrap_core::CoreError;
use thiserror::Error;

/// Errors raised while rewriting host text ranges
#[derive(Error, Debug)]
pub enum HostError {
    /// Core error (model loading)
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A caller-supplied argument was rejected before any mutation
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected
        reason: String,
    },

    /// The host exposed fewer characters than were written to it
    #[error("character {index} out of range (range has {len} characters)")]
    CharacterOutOfRange {
        /// Requested character index
        index: usize,
        /// Number of characters the host reported
        len: usize,
    },
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let error = HostError::InvalidArgument {
            reason: "separator must be exactly one character, got 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "invalid argument: separator must be exactly one character, got 3"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let error = HostError::CharacterOutOfRange { index: 5, len: 3 };
        assert_eq!(
            error.to_string(),
            "character 5 out of range (range has 3 characters)"
        );
    }

    #[test]
    fn test_core_error_conversion() {
        let core = phrasewrap_core::WeightTable::from_json_str("[]").unwrap_err();
        let error: HostError = core.into();
        assert!(matches!(error, HostError::Core(_)));
        assert!(error.to_string().starts_with("core error: invalid model"));
    }
}
