//! Sequential document ID formatting and parsing.
//!
//! Document IDs look like `INV-20260115-0007`: a prefix, the creation date,
//! and a sequence number zero-padded to 4 digits. The formatter performs no
//! uniqueness check; whoever assigns the sequence owns that guarantee.

pub mod error;
pub mod formatter;

pub use error::NumberingError;
pub use formatter::{DocumentNumber, Sequence, format_id, next_sequence, parse_id};
