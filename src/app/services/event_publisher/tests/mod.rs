//! Tests for batch ordering and publish dispatch


// Test helper functions and fixtures
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::app::models::{AssetEvent, EventType};
use crate::app::services::event_publisher::EventSink;
use crate::{Error, Result};

/// Create a test event with the given ticker, type, and date
pub fn event(ticker: &str, event_type: EventType, date: (i32, u32, u32)) -> AssetEvent {
    AssetEvent::new(
        ticker,
        event_type,
        "100.00".parse().unwrap(),
        NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
    )
    .unwrap()
}

/// Sink that fails every send with a transport error, counting attempts
pub struct FailingSink {
    pub attempts: AtomicUsize,
}

impl FailingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            attempts: AtomicUsize::new(0),
        })
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventSink for FailingSink {
    async fn send(&self, topic: &str, _key: &str, _event: &AssetEvent) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(Error::transport(topic, "broker unavailable"))
    }
}
