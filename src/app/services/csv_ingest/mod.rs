//! CSV parser for asset event files
//!
//! This module provides the parsing half of the ingestion pipeline: header
//! resolution, per-row validation, and batch accumulation with fail-fast error
//! semantics. A single bad row aborts the entire batch; partial imports are
//! never produced.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Core parsing orchestration and reader handling
//! - [`schema`] - Header label resolution to semantic column indices
//! - [`row_parser`] - Individual CSV record conversion and validation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use asset_event_ingestor::app::services::csv_ingest::CsvIngestor;
//!
//! # fn example() -> asset_event_ingestor::Result<()> {
//! let csv = "ticker,eventType,amount,date\nEQIX,PRICE_UPDATE,165.75,2025-06-01\n";
//! let ingestor = CsvIngestor::new();
//! let result = ingestor.parse_reader(csv.as_bytes(), "events.csv")?;
//!
//! println!(
//!     "Parsed {} events from {} rows",
//!     result.stats.events_parsed, result.stats.rows_read
//! );
//! # Ok(())
//! # }
//! ```

pub mod parser;
pub mod row_parser;
pub mod schema;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::CsvIngestor;
pub use schema::ColumnMap;
pub use stats::{ParseResult, ParseStats};
