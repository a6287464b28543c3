//! Payment status and balance tracking.

pub mod error;
pub mod tracker;
pub mod types;

#[cfg(test)]
mod props;

pub use error::PaymentError;
pub use tracker::apply_payment;
pub use types::{PaymentState, PaymentStatus};
