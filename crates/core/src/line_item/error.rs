//! Line item error types.

use opsdesk_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or editing a line item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineItemError {
    /// Quantity magnitude exceeds [`MAX_LINE_INPUT`](super::MAX_LINE_INPUT).
    #[error("Quantity {0} is out of range (magnitude must not exceed 1000000000000)")]
    QuantityOutOfRange(Decimal),

    /// Unit price magnitude exceeds [`MAX_LINE_INPUT`](super::MAX_LINE_INPUT).
    #[error("Unit price {0} is out of range (magnitude must not exceed 1000000000000)")]
    UnitPriceOutOfRange(Decimal),
}

impl From<LineItemError> for AppError {
    fn from(err: LineItemError) -> Self {
        Self::Validation(err.to_string())
    }
}
