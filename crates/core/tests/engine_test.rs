//! End-to-end checks of the billing engine through its public API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use opsdesk_core::line_item::{LineItem, normalize};
use opsdesk_core::numbering::{NumberingError, format_id, next_sequence, parse_id};
use opsdesk_core::payment::{PaymentError, PaymentState, PaymentStatus, apply_payment};
use opsdesk_core::rounding::round2;
use opsdesk_core::totals::aggregate;

fn item(quantity: Decimal, unit_price: Decimal) -> LineItem {
    LineItem::new("Service call", quantity, unit_price).unwrap()
}

#[test]
fn normalized_total_is_rounded_product() {
    let item = normalize(item(dec!(2.5), dec!(19.99)));
    assert_eq!(item.total(), round2(dec!(2.5) * dec!(19.99)));
    assert_eq!(item.total(), dec!(49.98));
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize(item(dec!(3), dec!(7.777)));
    assert_eq!(normalize(once.clone()), once);
}

#[test]
fn untaxed_undiscounted_total_equals_subtotal() {
    let items = vec![item(dec!(1), dec!(10.10)), item(dec!(2), dec!(0.45))];
    let totals = aggregate(&items, Decimal::ZERO, Decimal::ZERO).unwrap();

    assert_eq!(totals.subtotal, dec!(11.00));
    assert_eq!(totals.tax, Decimal::ZERO);
    assert_eq!(totals.total, totals.subtotal);
}

#[test]
fn tax_is_applied_before_discount() {
    let totals = aggregate(&[item(dec!(1), dec!(100))], dec!(0.08), dec!(10)).unwrap();
    assert_eq!(totals.total, dec!(98.00));
}

#[test]
fn empty_document_total_is_negative_discount() {
    let totals = aggregate(&[], dec!(0.1), dec!(5)).unwrap();
    assert_eq!(totals.total, dec!(-5.00));
}

#[test]
fn document_id_format() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    assert_eq!(format_id("Q", date, 7).unwrap(), "Q-20260115-0007");
}

#[test]
fn document_id_rejects_non_positive_sequence() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    assert!(matches!(
        format_id("Q", date, 0),
        Err(NumberingError::InvalidSequence(_))
    ));
    assert!(matches!(
        format_id("Q", date, -1),
        Err(NumberingError::InvalidSequence(_))
    ));
}

#[test]
fn issued_ids_feed_the_next_sequence() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let mut issued = Vec::new();
    for _ in 0..3 {
        let sequence = next_sequence(&issued, "INV", date);
        issued.push(format_id("INV", date, sequence).unwrap());
    }

    assert_eq!(issued.last().map(String::as_str), Some("INV-20260115-0003"));
    assert_eq!(parse_id(&issued[1]).unwrap().sequence.get(), 2);
}

#[test]
fn payment_lifecycle() {
    let unpaid = PaymentState {
        total: dec!(100),
        amount_paid: dec!(0),
        status: PaymentStatus::Unpaid,
    };

    let partial = apply_payment(&unpaid, dec!(40)).unwrap();
    assert_eq!(partial.amount_paid, dec!(40));
    assert_eq!(partial.status, PaymentStatus::Partial);
    assert_eq!(partial.balance(), dec!(60));

    let paid = apply_payment(&partial, dec!(60)).unwrap();
    assert_eq!(paid.amount_paid, dec!(100));
    assert_eq!(paid.status, PaymentStatus::Paid);
    assert_eq!(paid.balance(), dec!(0));
}

#[test]
fn overpayment_floors_balance() {
    let state = PaymentState {
        total: dec!(100),
        amount_paid: dec!(90),
        status: PaymentStatus::Partial,
    };

    let next = apply_payment(&state, dec!(50)).unwrap();
    assert_eq!(next.amount_paid, dec!(140));
    assert_eq!(next.status, PaymentStatus::Paid);
    assert_eq!(next.balance(), dec!(0));
}

#[test]
fn non_positive_payments_rejected() {
    let state = PaymentState::new(dec!(100));
    assert!(matches!(
        apply_payment(&state, dec!(0)),
        Err(PaymentError::InvalidPaymentAmount(_))
    ));
    assert!(matches!(
        apply_payment(&state, dec!(-5)),
        Err(PaymentError::InvalidPaymentAmount(_))
    ));
}

#[test]
fn payments_beyond_decimal_range_are_rejected() {
    let state = apply_payment(&PaymentState::new(dec!(100)), Decimal::MAX).unwrap();
    assert!(matches!(
        apply_payment(&state, dec!(1)),
        Err(PaymentError::AmountOverflow { .. })
    ));
}

#[test]
fn oversized_line_inputs_are_rejected() {
    assert!(LineItem::new("Bulk", dec!(100000000000000000), dec!(1000000000000000)).is_err());
}
