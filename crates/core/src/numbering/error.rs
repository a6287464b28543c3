//! Numbering error types.

use opsdesk_shared::AppError;
use thiserror::Error;

/// Errors raised while formatting or parsing document IDs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberingError {
    /// Sequence is zero, negative, or not a whole number.
    #[error("Invalid sequence: {0} (must be a positive integer)")]
    InvalidSequence(String),

    /// String is not a `PREFIX-YYYYMMDD-####` document ID.
    #[error("Invalid document ID: {0:?}")]
    InvalidDocumentId(String),
}

impl From<NumberingError> for AppError {
    fn from(err: NumberingError) -> Self {
        Self::Validation(err.to_string())
    }
}
