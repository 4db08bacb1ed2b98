//! Data models for asset event ingestion
//!
//! This module contains the core data structures for representing normalized
//! asset events parsed from CSV rows and published to the message sink.

use crate::constants::event_types;
use crate::{Error, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// =============================================================================
// Event Type
// =============================================================================

/// The closed set of asset event types
///
/// Wire and CSV spelling is SCREAMING_SNAKE_CASE and matching is
/// case-sensitive: `PRICE_UPDATE`, `SPLIT`, `AGGREGATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    PriceUpdate,
    Split,
    Aggregate,
}

impl EventType {
    /// Fixed publish rank used by the batch orderer
    ///
    /// This is an explicit rank table, deliberately not the enum declaration
    /// order or an alphabetical order: PriceUpdate=0, Split=1, Aggregate=2.
    pub const fn publish_rank(self) -> u8 {
        match self {
            EventType::PriceUpdate => 0,
            EventType::Split => 1,
            EventType::Aggregate => 2,
        }
    }

    /// Canonical wire spelling of this event type
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::PriceUpdate => event_types::PRICE_UPDATE,
            EventType::Split => event_types::SPLIT,
            EventType::Aggregate => event_types::AGGREGATE,
        }
    }
}

impl FromStr for EventType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            event_types::PRICE_UPDATE => Ok(EventType::PriceUpdate),
            event_types::SPLIT => Ok(EventType::Split),
            event_types::AGGREGATE => Ok(EventType::Aggregate),
            other => Err(Error::unknown_event_type(other)),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Asset Event Entity
// =============================================================================

/// Normalized, immutable record of one asset event
///
/// Constructed exactly once per successfully parsed row and never mutated
/// afterwards. The `event_id` is generated at construction time and serves as
/// a diagnostic handle, not a business key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEvent {
    /// Unique identifier generated at construction, never reassigned
    pub event_id: Uuid,

    /// Asset ticker symbol, trimmed and non-empty
    pub ticker: String,

    /// Event classification
    pub event_type: EventType,

    /// Monetary amount as an exact decimal, never binary floating point
    pub amount: Decimal,

    /// Calendar date of the event (no time-of-day, no timezone)
    pub date: NaiveDate,
}

impl AssetEvent {
    /// Create a new event with a freshly generated identifier
    ///
    /// The ticker is trimmed before validation; an empty ticker is rejected.
    pub fn new(
        ticker: impl Into<String>,
        event_type: EventType,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Self> {
        let ticker = ticker.into().trim().to_string();
        if ticker.is_empty() {
            return Err(Error::validation("ticker must not be empty"));
        }

        Ok(Self {
            event_id: Uuid::new_v4(),
            ticker,
            event_type,
            amount,
            date,
        })
    }
}
