//! Core CSV ingest parser implementation
//!
//! This module provides the main parser orchestration: reader setup, header
//! resolution, and the sequential fail-fast row loop that accumulates the
//! batch.

use std::io::Read;
use tracing::{debug, info};

use super::row_parser::parse_event_row;
use super::schema::ColumnMap;
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// CSV parser for asset event files
///
/// The parser is strictly synchronous and sequential: rows are read and
/// converted in source order, and the first bad row aborts the whole batch.
/// A populated [`ParseResult`] therefore means every row was valid.
#[derive(Debug, Default)]
pub struct CsvIngestor;

impl CsvIngestor {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse asset events from a byte reader
    ///
    /// `source_name` is the originating filename, used for diagnostics only.
    /// The reader runs in flexible mode so that short rows reach the width
    /// precondition in the row parser instead of failing inside the csv
    /// crate without row context.
    pub fn parse_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<ParseResult> {
        info!("Parsing asset event file: {}", source_name);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::csv_read(source_name, "failed to read CSV header", Some(e)))?;

        let columns = ColumnMap::resolve(headers)?;
        debug!(
            "Resolved columns: ticker={}, event_type={}, amount={}, date={}",
            columns.ticker, columns.event_type, columns.amount, columns.date
        );

        let mut stats = ParseStats::new();
        let mut events = Vec::new();

        for record in csv_reader.records() {
            let record = record
                .map_err(|e| Error::csv_read(source_name, "failed to read CSV record", Some(e)))?;
            stats.rows_read += 1;

            // Fail-fast: the first bad row aborts the entire batch
            let event = parse_event_row(&record, &columns)?;
            events.push(event);
            stats.events_parsed += 1;
        }

        info!("{}", stats.summary());

        Ok(ParseResult { events, stats })
    }
}
