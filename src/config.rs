//! Configuration management and validation.
//!
//! Provides the configuration structure for ingestion runs: the destination
//! topic events are published to and the delivery mode of the dispatcher.

use crate::constants::DEFAULT_TOPIC;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Global configuration for asset event ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Destination topic for published events
    pub topic: String,

    /// Await each acknowledgment before submitting the next event
    ///
    /// The default is concurrent fire-and-forget submission, which does not
    /// guarantee sink arrival order. Ordered delivery trades throughput for a
    /// strict arrival order matching the batch sort order.
    pub ordered_delivery: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            ordered_delivery: false,
        }
    }
}

impl IngestConfig {
    /// Create configuration with a custom destination topic
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    /// Enable sequential ordered delivery
    pub fn with_ordered_delivery(mut self) -> Self {
        self.ordered_delivery = true;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::configuration("topic must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IngestConfig::default();
        assert_eq!(config.topic, DEFAULT_TOPIC);
        assert!(!config.ordered_delivery);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = IngestConfig::default()
            .with_topic("corporate-actions")
            .with_ordered_delivery();

        assert_eq!(config.topic, "corporate-actions");
        assert!(config.ordered_delivery);
    }

    #[test]
    fn test_empty_topic_rejected() {
        let config = IngestConfig::default().with_topic("   ");
        assert!(matches!(
            config.validate(),
            Err(Error::Configuration { .. })
        ));
    }
}
