//! Line items and their normalization.
//!
//! A line item's `total` is always derived from its quantity and unit price;
//! callers can read it but never set it.

pub mod error;
pub mod normalizer;
pub mod types;

pub use error::LineItemError;
pub use normalizer::{normalize, normalize_all};
pub use types::{
    LineItem, MAX_LINE_INPUT, NEGATIVE_QUANTITY_WARNING, NEGATIVE_UNIT_PRICE_WARNING,
};
