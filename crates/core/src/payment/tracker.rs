//! Payment recording.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::PaymentError;
use super::types::PaymentState;

/// Records a payment against a document.
///
/// Overpayment is allowed: the status becomes `Paid`, the balance floors at
/// zero, and the excess is reported via [`PaymentState::overpayment`]. Status
/// transitions are not policed; callers are trusted to only ever add to
/// `amount_paid`.
///
/// # Errors
///
/// Returns `PaymentError::InvalidPaymentAmount` if `amount <= 0`, and
/// `PaymentError::AmountOverflow` if the new cumulative amount does not fit
/// in a `Decimal`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use opsdesk_core::payment::{PaymentState, PaymentStatus, apply_payment};
///
/// let state = apply_payment(&PaymentState::new(dec!(100)), dec!(40)).unwrap();
/// assert_eq!(state.status, PaymentStatus::Partial);
/// assert_eq!(state.balance(), dec!(60));
/// ```
pub fn apply_payment(state: &PaymentState, amount: Decimal) -> Result<PaymentState, PaymentError> {
    if amount <= Decimal::ZERO {
        return Err(PaymentError::InvalidPaymentAmount(amount));
    }

    let amount_paid = state
        .amount_paid
        .checked_add(amount)
        .ok_or(PaymentError::AmountOverflow {
            amount_paid: state.amount_paid,
            amount,
        })?;
    let next = PaymentState::from_parts(state.total, amount_paid);

    let overpayment = next.overpayment();
    if !overpayment.is_zero() {
        warn!(
            total = %next.total,
            amount_paid = %next.amount_paid,
            %overpayment,
            "payment exceeds document total"
        );
    }

    debug!(
        %amount,
        amount_paid = %next.amount_paid,
        status = %next.status,
        "payment applied"
    );

    Ok(next)
}
