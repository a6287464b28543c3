//! Core billing logic for Opsdesk.
//!
//! This crate contains pure business logic with ZERO web, database, or storage
//! dependencies. Every computation shared by quotes, invoices, and contracts
//! lives here so the editors and the PDF renderer agree on the numbers.
//!
//! # Modules
//!
//! - `rounding` - The single money rounding policy
//! - `line_item` - Line item normalization
//! - `totals` - Subtotal, tax, discount, and total aggregation
//! - `numbering` - Sequential document ID formatting and parsing
//! - `payment` - Payment status and balance tracking
//! - `document` - Per-document summaries combining all of the above

pub mod document;
pub mod line_item;
pub mod numbering;
pub mod payment;
pub mod rounding;
pub mod totals;
