//! Payment error types.

use opsdesk_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while recording payments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Payment amount is zero or negative.
    #[error("Invalid payment amount: {0} (must be greater than zero)")]
    InvalidPaymentAmount(Decimal),

    /// The cumulative amount paid would leave the representable range.
    #[error("Payment of {amount} overflows the amount already paid ({amount_paid})")]
    AmountOverflow {
        /// Amount paid before this payment.
        amount_paid: Decimal,
        /// Rejected payment amount.
        amount: Decimal,
    },
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        Self::Validation(err.to_string())
    }
}
