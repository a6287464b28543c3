//! Property-based tests for payment tracking.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::PaymentError;
use super::tracker::apply_payment;
use super::types::{PaymentState, PaymentStatus};

/// Strategy to generate document totals (0.01 to 100,000.00).
fn document_total() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive payments (0.01 to 50,000.00).
fn payment() -> impl Strategy<Value = Decimal> {
    (1i64..5_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Status always matches the classification invariant and the balance
    /// is never negative.
    #[test]
    fn prop_status_and_balance_invariant(
        total in document_total(),
        payments in prop::collection::vec(payment(), 1..8),
    ) {
        let mut state = PaymentState::new(total);
        for amount in payments {
            state = apply_payment(&state, amount).unwrap();

            let expected = if state.amount_paid >= total {
                PaymentStatus::Paid
            } else if state.amount_paid > Decimal::ZERO {
                PaymentStatus::Partial
            } else {
                PaymentStatus::Unpaid
            };
            prop_assert_eq!(state.status, expected);
            prop_assert!(state.balance() >= Decimal::ZERO);
            prop_assert_eq!(state.balance(), (total - state.amount_paid).max(Decimal::ZERO));
        }
    }

    /// Amount paid accumulates exactly.
    #[test]
    fn prop_amount_paid_accumulates(
        total in document_total(),
        payments in prop::collection::vec(payment(), 1..8),
    ) {
        let expected: Decimal = payments.iter().copied().sum();
        let mut state = PaymentState::new(total);
        for amount in payments {
            state = apply_payment(&state, amount).unwrap();
        }
        prop_assert_eq!(state.amount_paid, expected);
    }

    /// Non-positive amounts are always rejected.
    #[test]
    fn prop_non_positive_rejected(total in document_total(), cents in -10_000_000i64..=0) {
        let amount = Decimal::new(cents, 2);
        prop_assert_eq!(
            apply_payment(&PaymentState::new(total), amount),
            Err(PaymentError::InvalidPaymentAmount(amount))
        );
    }
}
