//! Tests for the CSV ingest parser components

pub mod row_parser_tests;

// Test helper functions and fixtures
use csv::StringRecord;

/// Build a StringRecord from string fields
pub fn record(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

/// The standard header in canonical order
pub fn standard_header() -> StringRecord {
    record(&["ticker", "eventType", "amount", "date"])
}
