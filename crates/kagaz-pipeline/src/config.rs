//! Configuration for the record pipeline

use kagaz_extractor::ClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`RecordPipeline`](crate::RecordPipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPipelineConfig {
    /// Completion client settings (generation knobs, retry backoff)
    pub client: ClientConfig,

    /// Fixed pause between items, regardless of outcome (seconds) — a
    /// simple rate cap against the external service
    pub throttle_secs: u64,
}

impl RecordPipelineConfig {
    /// Get the inter-item throttle as a Duration.
    pub fn throttle(&self) -> Duration {
        Duration::from_secs(self.throttle_secs)
    }

    /// Zero-delay preset for tests.
    pub fn no_throttle() -> Self {
        Self {
            client: ClientConfig::no_backoff(),
            throttle_secs: 0,
        }
    }
}

impl Default for RecordPipelineConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            throttle_secs: 1,
        }
    }
}
