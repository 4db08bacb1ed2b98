//! Ingestion pipeline orchestration
//!
//! This service ties the parsing and publishing halves together: it validates
//! the source, parses the complete batch with fail-fast semantics, rejects
//! empty batches, and hands the batch to the dispatcher. Parsing is
//! synchronous and sequential; only dispatch is concurrent.

use std::io::Read;
use std::sync::Arc;
use tracing::info;

use crate::app::services::csv_ingest::CsvIngestor;
use crate::app::services::event_publisher::{DispatchHandle, EventPublisher, EventSink};
use crate::config::IngestConfig;
use crate::constants::CSV_EXTENSION;
use crate::{Error, Result};

/// Report of one successful ingestion call
///
/// `events_accepted` counts events accepted for publish, i.e. submissions
/// initiated, not submissions acknowledged by the sink.
#[derive(Debug)]
pub struct IngestReport {
    /// Originating filename
    pub file: String,
    /// Number of events accepted for publish
    pub events_accepted: usize,
    /// Handle over the in-flight dispatch
    pub dispatch: DispatchHandle,
}

/// End-to-end ingestion service for asset event files
pub struct IngestService {
    parser: CsvIngestor,
    publisher: EventPublisher,
}

impl IngestService {
    /// Create an ingestion service publishing to the given sink
    pub fn new(config: &IngestConfig, sink: Arc<dyn EventSink>) -> Result<Self> {
        config.validate()?;

        let mut publisher = EventPublisher::new(sink, config.topic.clone());
        if config.ordered_delivery {
            publisher = publisher.with_ordered_delivery();
        }

        Ok(Self {
            parser: CsvIngestor::new(),
            publisher,
        })
    }

    /// Ingest one CSV source and publish its events
    ///
    /// Fails synchronously on schema or row errors (no partial result) and on
    /// sources that produce zero events. Returns once every submission has
    /// been initiated; transport failures surface only in the dispatch logs.
    pub async fn ingest<R: Read>(&self, reader: R, source_name: &str) -> Result<IngestReport> {
        if !source_name.to_lowercase().ends_with(CSV_EXTENSION) {
            return Err(Error::unsupported_file(source_name));
        }

        let result = self.parser.parse_reader(reader, source_name)?;

        if result.is_empty() {
            return Err(Error::empty_batch(source_name));
        }

        let events_accepted = result.event_count();
        info!(
            "Publishing {} events from {} to topic '{}'",
            events_accepted,
            source_name,
            self.publisher.topic()
        );

        let dispatch = self.publisher.publish_batch(result.events).await;

        Ok(IngestReport {
            file: source_name.to_string(),
            events_accepted,
            dispatch,
        })
    }
}
