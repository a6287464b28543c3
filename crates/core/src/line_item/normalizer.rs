//! Line total computation.

use rust_decimal::Decimal;

use super::types::{LineItem, NEGATIVE_QUANTITY_WARNING, NEGATIVE_UNIT_PRICE_WARNING};
use crate::rounding::round2;

/// Returns the item with `total = round2(quantity * unit_price)`.
///
/// Rounding happens once, on the product. Negative inputs are not rejected;
/// they flow through the arithmetic and leave a warning for the editor.
/// Normalizing an already normalized item returns it unchanged.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use opsdesk_core::line_item::{LineItem, normalize};
///
/// let item = normalize(LineItem::with_id("1", "Mulch", dec!(3), dec!(0.335)).unwrap());
/// assert_eq!(item.total(), dec!(1.01));
/// ```
#[must_use]
pub fn normalize(mut item: LineItem) -> LineItem {
    recompute(&mut item);
    item
}

/// Normalizes every item of a document, preserving order.
#[must_use]
pub fn normalize_all(items: impl IntoIterator<Item = LineItem>) -> Vec<LineItem> {
    items.into_iter().map(normalize).collect()
}

pub(crate) fn recompute(item: &mut LineItem) {
    // Both factors are within MAX_LINE_INPUT, so the product stays in range.
    item.total = round2(item.quantity * item.unit_price);
    item.warning = if item.quantity < Decimal::ZERO {
        Some(NEGATIVE_QUANTITY_WARNING.to_string())
    } else if item.unit_price < Decimal::ZERO {
        Some(NEGATIVE_UNIT_PRICE_WARNING.to_string())
    } else {
        None
    };
}
