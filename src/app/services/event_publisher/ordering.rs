//! Deterministic batch ordering for parsed asset events
//!
//! This module imposes the publish order over a fully parsed batch. The sort
//! is a pure, total function: the same input sequence always yields the same
//! output sequence.

use crate::app::models::AssetEvent;

/// Sort a batch of events into deterministic publish order
///
/// Sort key, in order of precedence:
/// 1. Ticker, ascending lexicographic
/// 2. Event type, ascending by the fixed publish rank
///    (PriceUpdate=0, Split=1, Aggregate=2)
/// 3. Date, ascending chronological
///
/// The sort is stable: entities that tie on all three keys keep their
/// relative input order.
pub fn order_events(mut events: Vec<AssetEvent>) -> Vec<AssetEvent> {
    events.sort_by(|a, b| {
        a.ticker
            .cmp(&b.ticker)
            .then_with(|| {
                a.event_type
                    .publish_rank()
                    .cmp(&b.event_type.publish_rank())
            })
            .then_with(|| a.date.cmp(&b.date))
    });
    events
}
