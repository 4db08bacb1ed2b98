//! Command-line argument definitions for the asset event ingestor
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the asset event ingestor
///
/// Ingests a CSV file of asset events, validates every row, and publishes
/// the batch to a sink in deterministic order.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "asset-event-ingestor",
    version,
    about = "Validate CSV asset event files and publish them to an event sink",
    long_about = "Parses a CSV file of financial asset events (price updates, splits, \
                  aggregations), validates and normalizes every row, sorts the batch \
                  deterministically, and dispatches each event to a sink keyed by ticker. \
                  A single invalid row rejects the entire file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest a CSV file and publish its events
    Ingest(IngestArgs),
}

/// Arguments for the ingest command
#[derive(Debug, Clone, Parser)]
pub struct IngestArgs {
    /// Path to the CSV file to ingest
    #[arg(value_name = "FILE", help = "CSV file of asset events")]
    pub file: PathBuf,

    /// Destination topic for published events
    #[arg(
        short = 't',
        long = "topic",
        value_name = "TOPIC",
        help = "Destination topic (defaults to asset-events)"
    )]
    pub topic: Option<String>,

    /// Write published events as JSON lines to this file instead of stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file for the JSON-lines sink"
    )]
    pub output: Option<PathBuf>,

    /// Await each acknowledgment before submitting the next event
    #[arg(long = "ordered", help = "Sequential ordered delivery")]
    pub ordered: bool,

    /// Parse and validate only; record events without writing them anywhere
    #[arg(long = "dry-run", help = "Validate and count without publishing")]
    pub dry_run: bool,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all but warning and error logs
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl IngestArgs {
    /// Log level derived from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
