//! Document data types.

use chrono::NaiveDate;
use opsdesk_shared::types::{Currency, Money};
use opsdesk_shared::NumberingConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;
use crate::payment::PaymentStatus;
use crate::totals::{Totals, TotalsFlag};

/// Kind of customer document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Priced proposal sent before work is agreed.
    Quote,
    /// Bill for completed work; the only kind that takes payments.
    Invoice,
    /// Signed agreement for recurring or scheduled work.
    Contract,
}

impl DocumentKind {
    /// ID prefix configured for this kind.
    #[must_use]
    pub fn prefix(self, config: &NumberingConfig) -> &str {
        match self {
            Self::Quote => &config.quote_prefix,
            Self::Invoice => &config.invoice_prefix,
            Self::Contract => &config.contract_prefix,
        }
    }

    /// Whether payments are recorded against this kind.
    #[must_use]
    pub const fn accepts_payments(self) -> bool {
        matches!(self, Self::Invoice)
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quote => write!(f, "quote"),
            Self::Invoice => write!(f, "invoice"),
            Self::Contract => write!(f, "contract"),
        }
    }
}

/// Raw document values as collected by an editor or read from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDraft {
    /// Document kind.
    pub kind: DocumentKind,
    /// Creation date, used in the document ID.
    pub issued_on: NaiveDate,
    /// Sequence assigned by the persistence layer.
    ///
    /// Stored counters may arrive as decimals (`7.0`); fractional values are
    /// rejected when the draft is summarized.
    pub sequence: Decimal,
    /// Line items.
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Fractional tax rate; falls back to the configured default.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Flat discount.
    #[serde(default)]
    pub discount: Decimal,
    /// Cumulative amount already received (invoices only).
    #[serde(default)]
    pub amount_paid: Decimal,
    /// Currency; falls back to the configured default.
    #[serde(default)]
    pub currency: Option<Currency>,
}

/// Everything a printed document needs, computed in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Formatted document ID.
    pub id: String,
    /// Document kind.
    pub kind: DocumentKind,
    /// Creation date.
    pub issued_on: NaiveDate,
    /// Normalized line items.
    pub items: Vec<LineItem>,
    /// Raw totals.
    pub totals: Totals,
    /// Subtotal in the document currency.
    pub subtotal: Money,
    /// Tax in the document currency.
    pub tax: Money,
    /// Discount in the document currency.
    pub discount: Money,
    /// Total in the document currency.
    pub total: Money,
    /// Amount received, invoices only.
    pub amount_paid: Option<Money>,
    /// Remaining balance, invoices only.
    pub balance: Option<Money>,
    /// Payment status, invoices only.
    pub status: Option<PaymentStatus>,
    /// Advisory flags for the UI.
    pub flags: Vec<TotalsFlag>,
}
