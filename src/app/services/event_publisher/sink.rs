//! Publish sink boundary for asset events
//!
//! This module defines the `EventSink` trait the dispatcher submits events
//! through, plus two built-in sinks: a JSON-lines sink for CLI/development
//! use and an in-memory recording sink for dry runs and tests. The real
//! message-bus client is an external collaborator implementing the same
//! trait; the core is indifferent to the wire encoding a sink uses.

use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;

use crate::app::models::AssetEvent;
use crate::{Error, Result};

/// Asynchronous publish sink for asset events
///
/// `send` submits one event under a partition/ordering key and resolves with
/// success or a transport error once the sink has acknowledged (or rejected)
/// the submission.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn send(&self, topic: &str, key: &str, event: &AssetEvent) -> Result<()>;
}

/// Sink writing one JSON object per event to an underlying writer
///
/// Used by the CLI as the default destination (stdout or a file). The topic
/// and key travel alongside the event so downstream tooling can replay the
/// stream against a real bus.
pub struct JsonLineSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLineSink<W> {
    /// Create a sink around a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

#[async_trait]
impl<W: Write + Send> EventSink for JsonLineSink<W> {
    async fn send(&self, topic: &str, key: &str, event: &AssetEvent) -> Result<()> {
        let line = serde_json::json!({
            "topic": topic,
            "key": key,
            "event": event,
        });

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| Error::transport(topic, "sink writer lock poisoned"))?;
        writeln!(writer, "{}", line)
            .map_err(|e| Error::transport(topic, format!("failed to write event: {}", e)))?;
        Ok(())
    }
}

/// Record of one accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct SentRecord {
    pub topic: String,
    pub key: String,
    pub event: AssetEvent,
}

/// In-memory sink recording every submission
///
/// Used for dry runs and for asserting dispatch behavior in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    sent: Mutex<Vec<SentRecord>>,
}

impl MemorySink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded submissions, in arrival order
    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().expect("sink lock poisoned").clone()
    }

    /// Number of recorded submissions
    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("sink lock poisoned").len()
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn send(&self, topic: &str, key: &str, event: &AssetEvent) -> Result<()> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| Error::transport(topic, "sink lock poisoned"))?;
        sent.push(SentRecord {
            topic: topic.to_string(),
            key: key.to_string(),
            event: event.clone(),
        });
        Ok(())
    }
}
