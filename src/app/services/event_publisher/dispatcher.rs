//! Publish dispatcher for ordered asset event batches
//!
//! This module submits each event of a batch to the configured sink. The
//! default mode is concurrent fire-and-forget: every submission is an
//! independent task, the caller regains control once all submissions are
//! initiated, and each completion is observed only for logging. Sink arrival
//! order is therefore a best-effort hint via the ticker key, not a total
//! order guarantee. The opt-in ordered mode awaits each acknowledgment before
//! the next submission, trading throughput for strict arrival order.

use futures::future::join_all;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::ordering::order_events;
use super::sink::EventSink;
use crate::app::models::AssetEvent;

/// Publisher submitting asset events to an external sink
pub struct EventPublisher {
    sink: Arc<dyn EventSink>,
    topic: String,
    ordered: bool,
}

impl EventPublisher {
    /// Create a publisher for a destination topic
    pub fn new(sink: Arc<dyn EventSink>, topic: impl Into<String>) -> Self {
        Self {
            sink,
            topic: topic.into(),
            ordered: false,
        }
    }

    /// Await each acknowledgment before submitting the next event
    pub fn with_ordered_delivery(mut self) -> Self {
        self.ordered = true;
        self
    }

    /// Destination topic of this publisher
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Sort the batch and submit every event to the sink
    ///
    /// Each submission uses the event's ticker as the partition/ordering key.
    /// The returned handle reports how many submissions were initiated;
    /// acknowledgments are logged per event and never fail the batch. Once
    /// dispatch begins, submissions are not revocable.
    pub async fn publish_batch(&self, events: Vec<AssetEvent>) -> DispatchHandle {
        let events = order_events(events);
        let submitted = events.len();

        info!(
            "Dispatching {} events to topic '{}' ({} delivery)",
            submitted,
            self.topic,
            if self.ordered { "ordered" } else { "concurrent" }
        );

        let mut tasks = Vec::with_capacity(if self.ordered { 0 } else { submitted });

        for event in events {
            if self.ordered {
                Self::submit(Arc::clone(&self.sink), self.topic.clone(), event).await;
            } else {
                tasks.push(tokio::spawn(Self::submit(
                    Arc::clone(&self.sink),
                    self.topic.clone(),
                    event,
                )));
            }
        }

        DispatchHandle { submitted, tasks }
    }

    /// Submit one event and log its completion
    async fn submit(sink: Arc<dyn EventSink>, topic: String, event: AssetEvent) {
        match sink.send(&topic, &event.ticker, &event).await {
            Ok(()) => {
                info!(
                    "Published event {} for ticker {} to topic {}",
                    event.event_id, event.ticker, topic
                );
            }
            Err(e) => {
                error!(
                    "Failed to publish event {} for ticker {} to topic {}: {}",
                    event.event_id, event.ticker, topic, e
                );
            }
        }
    }
}

/// Handle over an initiated dispatch
///
/// Returned as soon as all submissions have been initiated. Callers that need
/// to drain in-flight sends before shutting down can await [`settled`];
/// doing so is optional and observes completions only, it cannot cancel them.
///
/// [`settled`]: DispatchHandle::settled
#[derive(Debug)]
pub struct DispatchHandle {
    /// Number of submissions initiated
    pub submitted: usize,
    tasks: Vec<JoinHandle<()>>,
}

impl DispatchHandle {
    /// Wait until every submission task has completed
    ///
    /// Returns the number of submissions that were initiated. Transport
    /// failures have already been logged by the dispatch tasks and are not
    /// reported here.
    pub async fn settled(self) -> usize {
        join_all(self.tasks).await;
        self.submitted
    }
}
