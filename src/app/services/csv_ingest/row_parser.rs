//! Individual CSV record parsing for asset event files
//!
//! This module converts one raw CSV record into an [`AssetEvent`] or a
//! row-level diagnostic error that preserves the offending row verbatim.

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::schema::ColumnMap;
use crate::app::models::{AssetEvent, EventType};
use crate::constants::DATE_FORMAT;
use crate::{Error, Result};

/// Parse a single asset event record from CSV data
///
/// Field extraction and conversion order: ticker (trimmed, required
/// non-empty), event type (case-sensitive match against the closed set),
/// amount (exact decimal parse), date (ISO calendar date parse). The first
/// conversion failure aborts the row and raises a row parse error carrying
/// the raw row and the underlying failure as cause.
///
/// The event identifier is freshly generated per successful parse and never
/// derived from row content.
pub fn parse_event_row(record: &StringRecord, columns: &ColumnMap) -> Result<AssetEvent> {
    // Width precondition before any field is dereferenced
    if record.len() <= columns.max_index() {
        return Err(Error::row_parse(
            "insufficient columns",
            snapshot_row(record),
            None,
        ));
    }

    let ticker = require_field(record, columns.ticker, "ticker")?;

    let event_type_raw = require_field(record, columns.event_type, "eventType")?;
    let event_type = EventType::from_str(event_type_raw)
        .map_err(|e| row_error("invalid event type", record, e))?;

    let amount_raw = require_field(record, columns.amount, "amount")?;
    let amount = Decimal::from_str(amount_raw)
        .map_err(|e| row_error("invalid decimal amount", record, e))?;

    let date_raw = require_field(record, columns.date, "date")?;
    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT)
        .map_err(|e| row_error("invalid ISO date", record, e))?;

    AssetEvent::new(ticker, event_type, amount, date)
        .map_err(|e| row_error("invalid event field", record, e))
}

/// Extract a required field, trimmed, rejecting empty values
fn require_field<'a>(record: &'a StringRecord, index: usize, name: &str) -> Result<&'a str> {
    let value = record.get(index).map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(Error::row_parse(
            format!("empty value for required field '{}'", name),
            snapshot_row(record),
            None,
        ));
    }
    Ok(value)
}

/// Wrap a conversion failure into a row parse error with the raw row attached
fn row_error(
    message: &str,
    record: &StringRecord,
    source: impl std::error::Error + Send + Sync + 'static,
) -> Error {
    Error::row_parse(message, snapshot_row(record), Some(Box::new(source)))
}

/// Snapshot the raw row content for diagnostics
fn snapshot_row(record: &StringRecord) -> Vec<String> {
    record.iter().map(|field| field.to_string()).collect()
}
