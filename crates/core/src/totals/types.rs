//! Totals data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed money totals of one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line totals.
    pub subtotal: Decimal,
    /// Fractional tax rate the tax was computed with.
    pub tax_rate: Decimal,
    /// Tax on the subtotal.
    pub tax: Decimal,
    /// Flat discount subtracted after tax.
    pub discount: Decimal,
    /// `subtotal + tax - discount`. May be negative.
    pub total: Decimal,
}

/// Conditions the engine computes through but the UI should call out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalsFlag {
    /// Tax rate is below 0 or above 1 (likely a percentage typed as a rate).
    TaxRateOutOfRange,
    /// Discount exceeds subtotal plus tax.
    NegativeTotal,
}

impl Totals {
    /// Totals of a document with no lines, no tax, and no discount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            tax: Decimal::ZERO,
            discount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }

    /// Advisory flags for the form layer. Never affects the numbers.
    #[must_use]
    pub fn flags(&self) -> Vec<TotalsFlag> {
        let mut flags = Vec::new();
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            flags.push(TotalsFlag::TaxRateOutOfRange);
        }
        if self.total < Decimal::ZERO {
            flags.push(TotalsFlag::NegativeTotal);
        }
        flags
    }
}

impl Default for Totals {
    fn default() -> Self {
        Self::zero()
    }
}
