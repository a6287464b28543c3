//! Money rounding policy.
//!
//! Every engine output is rounded exactly once, at the boundary where it is
//! produced. Intermediate values keep full `Decimal` precision.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Decimal places for all monetary engine outputs.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Round a value half-up to 2 decimal places.
///
/// Half-up here means midpoints move away from zero, so `0.125` becomes
/// `0.13` and `-0.125` becomes `-0.13`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use opsdesk_core::rounding::round2;
///
/// assert_eq!(round2(dec!(2.345)), dec!(2.35));
/// assert_eq!(round2(dec!(2.344)), dec!(2.34));
/// ```
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
