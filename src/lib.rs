//! Asset Event Ingestor Library
//!
//! A Rust library for ingesting CSV files of financial asset events, validating
//! and normalizing each row into an immutable event record, and publishing the
//! batch to an asynchronous message sink in deterministic order.
//!
//! This library provides tools for:
//! - Resolving CSV header labels to semantic columns, tolerant of naming variants
//! - Parsing and validating rows into `AssetEvent` records with fail-fast semantics
//! - Deterministic batch ordering by ticker, event type rank, and date
//! - Fire-and-forget dispatch to a pluggable `EventSink` with per-event logging
//! - Comprehensive error handling with row-level diagnostics

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_ingest;
        pub mod event_publisher;
        pub mod ingest;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AssetEvent, EventType};
pub use config::IngestConfig;

/// Result type alias for the asset event ingestor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for ingestion operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader failed before a row could be examined
    #[error("CSV read error in file '{file}': {message}")]
    CsvRead {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Header missing or a required column could not be resolved
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// A single data row failed validation or conversion
    #[error("Row parse error: {message} (row: {row:?})")]
    RowParse {
        message: String,
        row: Vec<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Event type label outside the closed set
    #[error("Unknown event type '{value}': expected one of PRICE_UPDATE, SPLIT, AGGREGATE")]
    UnknownEventType { value: String },

    /// Entity-level validation failed
    #[error("Data validation error: {message}")]
    Validation { message: String },

    /// File parsed cleanly but produced no events
    #[error("No events found in file '{file}'")]
    EmptyBatch { file: String },

    /// Source file is not a CSV file
    #[error("Unsupported file type: '{file}' (expected .csv)")]
    UnsupportedFile { file: String },

    /// Publish sink rejected or failed a submission
    #[error("Transport error publishing to topic '{topic}': {message}")]
    Transport { topic: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV read error with context
    pub fn csv_read(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvRead {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a schema resolution error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Create a row parse error carrying the offending row verbatim
    pub fn row_parse(
        message: impl Into<String>,
        row: Vec<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::RowParse {
            message: message.into(),
            row,
            source,
        }
    }

    /// Create an unknown event type error
    pub fn unknown_event_type(value: impl Into<String>) -> Self {
        Self::UnknownEventType {
            value: value.into(),
        }
    }

    /// Create a data validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an empty batch error
    pub fn empty_batch(file: impl Into<String>) -> Self {
        Self::EmptyBatch { file: file.into() }
    }

    /// Create an unsupported file error
    pub fn unsupported_file(file: impl Into<String>) -> Self {
        Self::UnsupportedFile { file: file.into() }
    }

    /// Create a transport error
    pub fn transport(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            topic: topic.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The verbatim row attached to a row parse error, if any
    pub fn raw_row(&self) -> Option<&[String]> {
        match self {
            Self::RowParse { row, .. } => Some(row),
            _ => None,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
