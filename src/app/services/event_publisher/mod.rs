//! Event publishing for parsed asset event batches
//!
//! This module provides the publishing half of the ingestion pipeline:
//! deterministic batch ordering and asynchronous dispatch of each event to a
//! pluggable sink, keyed by ticker.
//!
//! ## Architecture
//!
//! - [`ordering`] - Stable deterministic sort over a parsed batch
//! - [`sink`] - The `EventSink` boundary trait and built-in sinks
//! - [`dispatcher`] - Fire-and-forget submission with per-event completion
//!   logging
//!
//! Dispatch is fire-and-forget: `publish_batch` returns once every submission
//! has been initiated, not once every submission has been acknowledged. A
//! failed acknowledgment is logged and never fails or retries the batch.

pub mod dispatcher;
pub mod ordering;
pub mod sink;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use dispatcher::{DispatchHandle, EventPublisher};
pub use ordering::order_events;
pub use sink::{EventSink, JsonLineSink, MemorySink, SentRecord};
