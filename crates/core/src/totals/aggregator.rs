//! Totals aggregation.
//!
//! The order of operations is a business policy printed on customer
//! documents and must not change:
//!
//! 1. Sum the line totals into the subtotal
//! 2. Tax the subtotal (never the discount, never the tax)
//! 3. Subtract the flat discount last

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::TotalsError;
use super::types::{Totals, TotalsFlag};
use crate::line_item::LineItem;
use crate::rounding::round2;

/// Aggregates line items into document totals.
///
/// Out-of-range tax rates and discounts larger than `subtotal + tax` are
/// computed through, not rejected; see [`Totals::flags`].
///
/// # Errors
///
/// Returns `TotalsError::Overflow` if the subtotal, tax, or total leaves the
/// `Decimal` range.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use opsdesk_core::line_item::LineItem;
/// use opsdesk_core::totals::aggregate;
///
/// let items = vec![LineItem::with_id("1", "Deck repair", dec!(1), dec!(100)).unwrap()];
/// let totals = aggregate(&items, dec!(0.08), dec!(10)).unwrap();
/// assert_eq!(totals.tax, dec!(8.00));
/// assert_eq!(totals.total, dec!(98.00));
/// ```
pub fn aggregate(
    items: &[LineItem],
    tax_rate: Decimal,
    discount: Decimal,
) -> Result<Totals, TotalsError> {
    let sum = items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.total()))
        .ok_or(TotalsError::Overflow("subtotal"))?;
    let subtotal = round2(sum);
    let tax = round2(
        subtotal
            .checked_mul(tax_rate)
            .ok_or(TotalsError::Overflow("tax"))?,
    );
    let total = round2(
        subtotal
            .checked_add(tax)
            .and_then(|gross| gross.checked_sub(discount))
            .ok_or(TotalsError::Overflow("total"))?,
    );

    let totals = Totals {
        subtotal,
        tax_rate,
        tax,
        discount,
        total,
    };

    for flag in totals.flags() {
        match flag {
            TotalsFlag::TaxRateOutOfRange => {
                warn!(%tax_rate, "tax rate outside [0, 1]");
            }
            TotalsFlag::NegativeTotal => {
                warn!(%subtotal, %tax, %discount, %total, "discount exceeds subtotal plus tax");
            }
        }
    }

    debug!(
        items = items.len(),
        %subtotal,
        %tax,
        %total,
        "aggregated document totals"
    );

    Ok(totals)
}

/// Converts a percentage entered on a form (`8` for 8%) into a rate (`0.08`).
#[must_use]
pub fn rate_from_percent(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}
