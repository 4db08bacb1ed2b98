//! Command implementations for the asset event ingestor CLI
//!
//! This module contains logging setup and the execution logic for the ingest
//! command. The CLI plays the role of the upstream file-intake collaborator:
//! it opens the file, supplies the byte stream plus filename to the core
//! pipeline, and reports the outcome.

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tracing::debug;

use crate::app::services::event_publisher::{EventSink, JsonLineSink, MemorySink};
use crate::app::services::ingest::IngestService;
use crate::cli::args::{Args, Commands, IngestArgs};
use crate::config::IngestConfig;
use crate::{Error, Result};

/// Main command runner
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub async fn run(args: Args) -> Result<usize> {
    match args.command {
        Some(Commands::Ingest(ingest_args)) => run_ingest(ingest_args).await,
        None => Err(Error::configuration(
            "no command provided; run with --help for usage",
        )),
    }
}

/// Set up structured logging for the ingest command
pub fn setup_logging(args: &IngestArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("asset_event_ingestor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Execute the ingest command
pub async fn run_ingest(args: IngestArgs) -> Result<usize> {
    setup_logging(&args)?;

    let mut config = IngestConfig::default();
    if let Some(topic) = &args.topic {
        config = config.with_topic(topic.clone());
    }
    if args.ordered {
        config = config.with_ordered_delivery();
    }

    let sink = build_sink(&args)?;
    let service = IngestService::new(&config, sink)?;

    let file_name = args.file.display().to_string();
    let file = File::open(&args.file)
        .map_err(|e| Error::io(format!("failed to open '{}'", file_name), e))?;

    let report = service.ingest(BufReader::new(file), &file_name).await?;
    let accepted = report.events_accepted;

    // Drain in-flight sends so completion logs land before the process exits
    report.dispatch.settled().await;

    if args.dry_run {
        println!("Validated {} events from {} (dry run)", accepted, file_name);
    } else {
        println!("Successfully ingested {} events from {}", accepted, file_name);
    }

    Ok(accepted)
}

/// Build the publish sink selected by the CLI flags
fn build_sink(args: &IngestArgs) -> Result<Arc<dyn EventSink>> {
    if args.dry_run {
        return Ok(Arc::new(MemorySink::new()));
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                Error::io(format!("failed to create '{}'", path.display()), e)
            })?;
            Ok(Arc::new(JsonLineSink::new(file)))
        }
        None => Ok(Arc::new(JsonLineSink::new(std::io::stdout()))),
    }
}
