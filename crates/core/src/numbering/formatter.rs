//! Document ID formatter.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::NumberingError;

/// Minimum width of the sequence part.
const SEQUENCE_WIDTH: usize = 4;

/// A validated document sequence number (always `>= 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Sequence(i64);

impl Sequence {
    /// Returns the raw sequence value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Sequence {
    type Error = NumberingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(NumberingError::InvalidSequence(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl TryFrom<Decimal> for Sequence {
    type Error = NumberingError;

    /// Accepts whole-number decimals such as `7` or `7.0` from stored counters.
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if !value.fract().is_zero() {
            return Err(NumberingError::InvalidSequence(value.to_string()));
        }
        let whole = value
            .to_i64()
            .ok_or_else(|| NumberingError::InvalidSequence(value.to_string()))?;
        Self::try_from(whole)
    }
}

impl From<Sequence> for i64 {
    fn from(sequence: Sequence) -> Self {
        sequence.0
    }
}

/// The parts of a document ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentNumber {
    /// Document kind prefix (e.g. "Q", "INV").
    pub prefix: String,
    /// Creation date.
    pub date: NaiveDate,
    /// Assigned sequence.
    pub sequence: Sequence,
}

impl DocumentNumber {
    /// Builds a document number, validating the sequence.
    ///
    /// # Errors
    ///
    /// Returns `NumberingError::InvalidSequence` if `sequence < 1`.
    pub fn new(
        prefix: impl Into<String>,
        date: NaiveDate,
        sequence: i64,
    ) -> Result<Self, NumberingError> {
        Ok(Self {
            prefix: prefix.into(),
            date,
            sequence: Sequence::try_from(sequence)?,
        })
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}{:02}{:02}-{:0width$}",
            self.prefix,
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.sequence.get(),
            width = SEQUENCE_WIDTH
        )
    }
}

impl FromStr for DocumentNumber {
    type Err = NumberingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumberingError::InvalidDocumentId(s.to_string());

        // Split from the right so prefixes may themselves contain dashes.
        let mut parts = s.rsplitn(3, '-');
        let sequence = parts.next().ok_or_else(invalid)?;
        let date = parts.next().ok_or_else(invalid)?;
        let prefix = parts.next().ok_or_else(invalid)?;

        if prefix.is_empty() {
            return Err(invalid());
        }
        if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if sequence.len() < SEQUENCE_WIDTH || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // Zero padding only ever fills up to the minimum width.
        if sequence.len() > SEQUENCE_WIDTH && sequence.starts_with('0') {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(date, "%Y%m%d").map_err(|_| invalid())?;
        let sequence: i64 = sequence.parse().map_err(|_| invalid())?;
        let sequence = Sequence::try_from(sequence).map_err(|_| invalid())?;

        Ok(Self {
            prefix: prefix.to_string(),
            date,
            sequence,
        })
    }
}

/// Formats a document ID as `{prefix}-{YYYYMMDD}-{sequence:04}`.
///
/// Sequences above 9999 print with as many digits as they need.
///
/// # Errors
///
/// Returns `NumberingError::InvalidSequence` if `sequence < 1`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use opsdesk_core::numbering::format_id;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(format_id("Q", date, 7).unwrap(), "Q-20260115-0007");
/// ```
pub fn format_id(prefix: &str, date: NaiveDate, sequence: i64) -> Result<String, NumberingError> {
    let id = DocumentNumber::new(prefix, date, sequence)?.to_string();
    debug!(%id, "formatted document id");
    Ok(id)
}

/// Parses a document ID back into its parts.
///
/// # Errors
///
/// Returns `NumberingError::InvalidDocumentId` if the string is malformed.
pub fn parse_id(id: &str) -> Result<DocumentNumber, NumberingError> {
    id.parse()
}

/// Next free sequence for `prefix` on `date`, given the IDs already issued.
///
/// IDs for other prefixes or dates and unparseable strings are ignored.
/// This is only a suggestion for offline use; the persistence layer must
/// still assign sequences atomically.
#[must_use]
pub fn next_sequence<I, S>(existing: I, prefix: &str, date: NaiveDate) -> i64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    existing
        .into_iter()
        .filter_map(|id| parse_id(id.as_ref()).ok())
        .filter(|number| number.prefix == prefix && number.date == date)
        .map(|number| number.sequence.get())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
