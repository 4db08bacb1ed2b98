//! Header label resolution for asset event CSV files
//!
//! This module maps the labels of a header row to the column indices of the
//! four required semantic fields: ticker, event type, amount, and date.

use crate::constants::schema::{AMOUNT_LABELS, DATE_LABELS, EVENT_TYPE_LABELS, TICKER_LABELS};
use crate::{Error, Result};
use csv::StringRecord;

/// Resolved column positions for the four required semantic fields
///
/// Produced once per file by [`ColumnMap::resolve`] and shared read-only with
/// the row parser for the rest of the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Column index of the ticker field
    pub ticker: usize,

    /// Column index of the event type field
    pub event_type: usize,

    /// Column index of the amount field
    pub amount: usize,

    /// Column index of the date field
    pub date: usize,
}

impl ColumnMap {
    /// Resolve header labels to semantic column indices
    ///
    /// Matching is case-insensitive and trims surrounding whitespace. Labels
    /// that match none of the accepted variants are ignored. If two columns
    /// both satisfy the same field's variants, the right-most match wins: the
    /// scan proceeds left to right and overwrites the previously resolved
    /// index unconditionally.
    ///
    /// Fails with a schema error if the header row is absent (empty record)
    /// or any of the four required fields has no column mapped.
    pub fn resolve(headers: &StringRecord) -> Result<Self> {
        if headers.is_empty() || headers.iter().all(|label| label.trim().is_empty()) {
            return Err(Error::schema("CSV source has no header row"));
        }

        let mut ticker = None;
        let mut event_type = None;
        let mut amount = None;
        let mut date = None;

        for (index, label) in headers.iter().enumerate() {
            let normalized = label.trim().to_lowercase();

            if TICKER_LABELS.contains(&normalized.as_str()) {
                ticker = Some(index);
            } else if EVENT_TYPE_LABELS.contains(&normalized.as_str()) {
                event_type = Some(index);
            } else if AMOUNT_LABELS.contains(&normalized.as_str()) {
                amount = Some(index);
            } else if DATE_LABELS.contains(&normalized.as_str()) {
                date = Some(index);
            }
        }

        match (ticker, event_type, amount, date) {
            (Some(ticker), Some(event_type), Some(amount), Some(date)) => Ok(ColumnMap {
                ticker,
                event_type,
                amount,
                date,
            }),
            _ => {
                let mut missing = Vec::new();
                if ticker.is_none() {
                    missing.push("ticker");
                }
                if event_type.is_none() {
                    missing.push("eventType");
                }
                if amount.is_none() {
                    missing.push("amount");
                }
                if date.is_none() {
                    missing.push("date");
                }

                Err(Error::schema(format!(
                    "CSV header is missing required columns: {}",
                    missing.join(", ")
                )))
            }
        }
    }

    /// Highest column index any required field resolves to
    ///
    /// Rows with fewer fields than this index + 1 cannot be dereferenced
    /// safely and are rejected before field extraction.
    pub fn max_index(&self) -> usize {
        self.ticker
            .max(self.event_type)
            .max(self.amount)
            .max(self.date)
    }
}
