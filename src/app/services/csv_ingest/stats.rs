//! Parsing statistics and result structures for the CSV ingest pipeline

use crate::app::models::AssetEvent;

/// Statistics for a single parse operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of data rows read from the source
    pub rows_read: usize,
    /// Number of events successfully parsed
    pub events_parsed: usize,
}

impl ParseStats {
    /// Create new empty parsing statistics
    pub fn new() -> Self {
        Self {
            rows_read: 0,
            events_parsed: 0,
        }
    }

    /// Summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Parsed {} events from {} rows",
            self.events_parsed, self.rows_read
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing one CSV source
///
/// Parsing is all-or-nothing: a populated result means every data row in the
/// source converted successfully.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed events, in source order
    pub events: Vec<AssetEvent>,
    /// Parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Number of parsed events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Whether the source contained no data rows
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
