//! Property-based tests for totals aggregation.
//!
//! - Subtotal is the rounded sum of line totals
//! - Tax applies to the subtotal only
//! - Discount is subtracted last and never clamped

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::aggregate;
use crate::line_item::LineItem;
use crate::rounding::round2;

/// Strategy to generate a line item (qty 0-100 by hundredths, price 0.00-5,000.00).
fn line_item() -> impl Strategy<Value = LineItem> {
    ((0i64..10_000i64), (0i64..500_000i64)).prop_map(|(q, p)| {
        LineItem::with_id("p", "generated", Decimal::new(q, 2), Decimal::new(p, 2)).unwrap()
    })
}

/// Strategy to generate tax rates 0.0000 to 1.0000.
fn tax_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate discounts 0.00 to 10,000.00.
fn discount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Without tax or discount the total is the subtotal.
    #[test]
    fn prop_untaxed_total_equals_subtotal(items in prop::collection::vec(line_item(), 0..20)) {
        let totals = aggregate(&items, Decimal::ZERO, Decimal::ZERO).unwrap();
        let expected: Decimal = items.iter().map(LineItem::total).sum();

        prop_assert_eq!(totals.subtotal, round2(expected));
        prop_assert_eq!(totals.tax, Decimal::ZERO);
        prop_assert_eq!(totals.total, totals.subtotal);
    }

    /// Tax is computed on the subtotal and the discount comes off afterwards.
    #[test]
    fn prop_fixed_order_of_operations(
        items in prop::collection::vec(line_item(), 0..20),
        rate in tax_rate(),
        discount in discount(),
    ) {
        let totals = aggregate(&items, rate, discount).unwrap();

        prop_assert_eq!(totals.tax, round2(totals.subtotal * rate));
        prop_assert_eq!(totals.total, round2(totals.subtotal + totals.tax - discount));
    }

    /// The discount never changes the tax.
    #[test]
    fn prop_discount_does_not_affect_tax(
        items in prop::collection::vec(line_item(), 1..10),
        rate in tax_rate(),
        discount in discount(),
    ) {
        let without = aggregate(&items, rate, Decimal::ZERO).unwrap();
        let with = aggregate(&items, rate, discount).unwrap();

        prop_assert_eq!(without.tax, with.tax);
        prop_assert_eq!(without.total - with.total, discount);
    }

    /// Aggregation is deterministic.
    #[test]
    fn prop_aggregate_deterministic(
        items in prop::collection::vec(line_item(), 0..10),
        rate in tax_rate(),
        discount in discount(),
    ) {
        prop_assert_eq!(aggregate(&items, rate, discount), aggregate(&items, rate, discount));
    }
}
