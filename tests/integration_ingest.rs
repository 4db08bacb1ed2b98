//! Integration tests for the full ingestion pipeline
//!
//! These tests exercise parse, order, and dispatch end to end: a CSV file on
//! disk goes in, recorded sink submissions come out.

use asset_event_ingestor::app::services::event_publisher::MemorySink;
use asset_event_ingestor::app::services::ingest::IngestService;
use asset_event_ingestor::{Error, EventType, IngestConfig};
use std::fs::File;
use std::io::{BufReader, Write};
use std::sync::Arc;
use tempfile::TempDir;

/// Write a CSV fixture file and return its path
fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("failed to create fixture");
    file.write_all(content.as_bytes())
        .expect("failed to write fixture");
    path
}

#[tokio::test]
async fn test_ingest_file_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "events.csv",
        "ticker,eventType,amount,date\n\
         EQIX,PRICE_UPDATE,165.75,2025-06-01\n\
         GOOG,SPLIT,20,2025-02-10\n\
         EQIX,AGGREGATE,1200.00,2025-06-30\n",
    );

    let sink = Arc::new(MemorySink::new());
    let service = IngestService::new(&IngestConfig::default(), sink.clone()).unwrap();

    let file = BufReader::new(File::open(&path).unwrap());
    let report = service
        .ingest(file, &path.display().to_string())
        .await
        .expect("ingestion should succeed");

    assert_eq!(report.events_accepted, 3);
    assert_eq!(report.dispatch.settled().await, 3);

    let sent = sink.sent();
    assert_eq!(sent.len(), 3);
    for record in &sent {
        assert_eq!(record.topic, "asset-events");
        assert_eq!(record.key, record.event.ticker);
    }
}

#[tokio::test]
async fn test_ordered_ingest_arrives_in_deterministic_order() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "events.csv",
        "ticker,eventType,amount,date\n\
         B,SPLIT,2,2025-02-01\n\
         A,AGGREGATE,10,2025-01-01\n\
         A,PRICE_UPDATE,99.5,2025-01-01\n",
    );

    let sink = Arc::new(MemorySink::new());
    let config = IngestConfig::default().with_ordered_delivery();
    let service = IngestService::new(&config, sink.clone()).unwrap();

    let file = BufReader::new(File::open(&path).unwrap());
    let report = service
        .ingest(file, &path.display().to_string())
        .await
        .unwrap();
    report.dispatch.settled().await;

    let arrival: Vec<_> = sink
        .sent()
        .iter()
        .map(|r| (r.event.ticker.clone(), r.event.event_type))
        .collect();
    assert_eq!(
        arrival,
        vec![
            ("A".to_string(), EventType::PriceUpdate),
            ("A".to_string(), EventType::Aggregate),
            ("B".to_string(), EventType::Split),
        ]
    );
}

#[tokio::test]
async fn test_ingest_rejects_file_with_bad_row_before_any_dispatch() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "events.csv",
        "ticker,eventType,amount,date\n\
         EQIX,PRICE_UPDATE,165.75,2025-06-01\n\
         GOOG,SPLIT\n\
         MSFT,AGGREGATE,10,2025-06-02\n",
    );

    let sink = Arc::new(MemorySink::new());
    let service = IngestService::new(&IngestConfig::default(), sink.clone()).unwrap();

    let file = BufReader::new(File::open(&path).unwrap());
    let error = service
        .ingest(file, &path.display().to_string())
        .await
        .unwrap_err();

    assert!(matches!(error, Error::RowParse { .. }));
    assert_eq!(error.raw_row().unwrap(), &["GOOG", "SPLIT"]);
    assert_eq!(sink.sent_count(), 0);
}

#[tokio::test]
async fn test_ingest_rejects_schema_mismatch() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "events.csv",
        "ticker,amount,date\nEQIX,165.75,2025-06-01\n",
    );

    let sink = Arc::new(MemorySink::new());
    let service = IngestService::new(&IngestConfig::default(), sink.clone()).unwrap();

    let file = BufReader::new(File::open(&path).unwrap());
    let error = service
        .ingest(file, &path.display().to_string())
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Schema { .. }));
    assert_eq!(sink.sent_count(), 0);
}

#[tokio::test]
async fn test_ingest_custom_topic() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "events.csv",
        "ticker,eventType,amount,date\nEQIX,SPLIT,2,2025-06-01\n",
    );

    let sink = Arc::new(MemorySink::new());
    let config = IngestConfig::default().with_topic("corporate-actions");
    let service = IngestService::new(&config, sink.clone()).unwrap();

    let file = BufReader::new(File::open(&path).unwrap());
    let report = service
        .ingest(file, &path.display().to_string())
        .await
        .unwrap();
    report.dispatch.settled().await;

    assert_eq!(sink.sent()[0].topic, "corporate-actions");
}
