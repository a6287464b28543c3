//! Line item data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::LineItemError;
use super::normalizer::{normalize, recompute};

/// Largest accepted magnitude for a quantity or unit price (one trillion).
///
/// Keeps `quantity * unit_price` and document sums well inside `Decimal`'s
/// range.
pub const MAX_LINE_INPUT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Warning attached when a line has a negative quantity.
pub const NEGATIVE_QUANTITY_WARNING: &str = "negative quantity";

/// Warning attached when a line has a negative unit price.
pub const NEGATIVE_UNIT_PRICE_WARNING: &str = "negative unit price";

/// One billable row on a quote, invoice, or contract.
///
/// Deserialization ignores any stored `total` and renormalizes, so a
/// persisted document can never smuggle in a stale line total. Quantities
/// and unit prices beyond [`MAX_LINE_INPUT`] fail to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord")]
pub struct LineItem {
    /// Identifier, unique within its document.
    pub id: String,
    /// Free-text description.
    pub description: String,
    pub(crate) quantity: Decimal,
    pub(crate) unit_price: Decimal,
    pub(crate) total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) warning: Option<String>,
}

/// Shape of a line item as stored by the document store.
#[derive(Debug, Deserialize)]
struct LineItemRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: Decimal,
    #[serde(default)]
    unit_price: Decimal,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = LineItemError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        let id = record.id.unwrap_or_else(|| Uuid::now_v7().to_string());
        Self::with_id(id, record.description, record.quantity, record.unit_price)
    }
}

fn check_quantity(quantity: Decimal) -> Result<Decimal, LineItemError> {
    if quantity.abs() > MAX_LINE_INPUT {
        return Err(LineItemError::QuantityOutOfRange(quantity));
    }
    Ok(quantity)
}

fn check_unit_price(unit_price: Decimal) -> Result<Decimal, LineItemError> {
    if unit_price.abs() > MAX_LINE_INPUT {
        return Err(LineItemError::UnitPriceOutOfRange(unit_price));
    }
    Ok(unit_price)
}

impl LineItem {
    /// Creates a normalized line item with a fresh time-ordered ID.
    ///
    /// # Errors
    ///
    /// Returns a `LineItemError` if the quantity or unit price magnitude
    /// exceeds [`MAX_LINE_INPUT`].
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, LineItemError> {
        Self::with_id(Uuid::now_v7().to_string(), description, quantity, unit_price)
    }

    /// Creates a normalized line item with a caller-supplied ID.
    ///
    /// # Errors
    ///
    /// Same as [`LineItem::new`].
    pub fn with_id(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, LineItemError> {
        Ok(normalize(Self {
            id: id.into(),
            description: description.into(),
            quantity: check_quantity(quantity)?,
            unit_price: check_unit_price(unit_price)?,
            total: Decimal::ZERO,
            warning: None,
        }))
    }

    /// Quantity billed.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Price per unit.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Derived line total, `round2(quantity * unit_price)`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Advisory warning for the editor, if any.
    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Replaces the quantity and recomputes the total.
    ///
    /// # Errors
    ///
    /// Returns `LineItemError::QuantityOutOfRange` and leaves the item
    /// untouched if the magnitude exceeds [`MAX_LINE_INPUT`].
    pub fn set_quantity(&mut self, quantity: Decimal) -> Result<(), LineItemError> {
        self.quantity = check_quantity(quantity)?;
        recompute(self);
        Ok(())
    }

    /// Replaces the unit price and recomputes the total.
    ///
    /// # Errors
    ///
    /// Returns `LineItemError::UnitPriceOutOfRange` and leaves the item
    /// untouched if the magnitude exceeds [`MAX_LINE_INPUT`].
    pub fn set_unit_price(&mut self, unit_price: Decimal) -> Result<(), LineItemError> {
        self.unit_price = check_unit_price(unit_price)?;
        recompute(self);
        Ok(())
    }
}
