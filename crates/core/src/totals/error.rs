//! Totals error types.

use opsdesk_shared::AppError;
use thiserror::Error;

/// Errors raised while aggregating document totals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TotalsError {
    /// An intermediate amount left the representable decimal range.
    #[error("Amount overflow while computing the {0}")]
    Overflow(&'static str),
}

impl From<TotalsError> for AppError {
    fn from(err: TotalsError) -> Self {
        Self::Validation(err.to_string())
    }
}
