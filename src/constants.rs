//! Application constants for the asset event ingestor
//!
//! This module contains the accepted header label variants for each required
//! column, the canonical event type spellings, and default values used
//! throughout the ingestion pipeline.

// =============================================================================
// Schema Label Variants
// =============================================================================

/// Accepted header label spellings for each required semantic column
///
/// Labels are matched case-insensitively after trimming surrounding whitespace.
/// Header columns whose labels match none of these are ignored.
pub mod schema {
    /// Accepted spellings for the ticker column
    pub const TICKER_LABELS: &[&str] = &["ticker"];

    /// Accepted spellings for the event type column
    pub const EVENT_TYPE_LABELS: &[&str] = &["eventtype", "event_type", "event type"];

    /// Accepted spellings for the amount column
    pub const AMOUNT_LABELS: &[&str] = &["amount"];

    /// Accepted spellings for the date column
    pub const DATE_LABELS: &[&str] = &["date"];
}

// =============================================================================
// Event Type Wire Spellings
// =============================================================================

/// Canonical event type spellings as they appear in CSV cells and on the wire
///
/// Data rows must match these exactly (case-sensitive).
pub mod event_types {
    pub const PRICE_UPDATE: &str = "PRICE_UPDATE";
    pub const SPLIT: &str = "SPLIT";
    pub const AGGREGATE: &str = "AGGREGATE";
}

// =============================================================================
// Defaults
// =============================================================================

/// Default destination topic for published events
pub const DEFAULT_TOPIC: &str = "asset-events";

/// ISO-8601 calendar date format used in CSV date cells
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expected file extension for ingested sources
pub const CSV_EXTENSION: &str = ".csv";
