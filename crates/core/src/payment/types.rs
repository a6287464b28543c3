//! Payment data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment status classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Nothing paid yet.
    Unpaid,
    /// Some, but not all, of the total paid.
    Partial,
    /// Total paid in full (or overpaid).
    Paid,
}

impl PaymentStatus {
    /// Classifies a document from its total and cumulative amount paid.
    ///
    /// - `Paid` iff `amount_paid >= total`
    /// - `Partial` iff `0 < amount_paid < total`
    /// - `Unpaid` otherwise
    #[must_use]
    pub fn classify(total: Decimal, amount_paid: Decimal) -> Self {
        if amount_paid >= total {
            Self::Paid
        } else if amount_paid > Decimal::ZERO {
            Self::Partial
        } else {
            Self::Unpaid
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unpaid => write!(f, "unpaid"),
            Self::Partial => write!(f, "partial"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

/// Payment progress of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentState {
    /// Document total being paid against.
    pub total: Decimal,
    /// Cumulative amount received.
    pub amount_paid: Decimal,
    /// Status derived from `total` and `amount_paid`.
    pub status: PaymentStatus,
}

impl PaymentState {
    /// A state with nothing paid yet.
    #[must_use]
    pub fn new(total: Decimal) -> Self {
        Self::from_parts(total, Decimal::ZERO)
    }

    /// Rebuilds a state from persisted values, recomputing the status.
    #[must_use]
    pub fn from_parts(total: Decimal, amount_paid: Decimal) -> Self {
        Self {
            total,
            amount_paid,
            status: PaymentStatus::classify(total, amount_paid),
        }
    }

    /// Remaining balance, `max(0, total - amount_paid)`.
    ///
    /// Saturates at `Decimal::MAX` for persisted values whose difference
    /// does not fit.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.total
            .saturating_sub(self.amount_paid)
            .max(Decimal::ZERO)
    }

    /// Amount received beyond the total, `max(0, amount_paid - total)`.
    #[must_use]
    pub fn overpayment(&self) -> Decimal {
        self.amount_paid
            .saturating_sub(self.total)
            .max(Decimal::ZERO)
    }
}
