//! Subtotal, tax, discount, and total aggregation.

pub mod aggregator;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use aggregator::{aggregate, rate_from_percent};
pub use error::TotalsError;
pub use types::{Totals, TotalsFlag};
