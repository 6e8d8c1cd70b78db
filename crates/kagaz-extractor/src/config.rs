//! Configuration for the completion client

use kagaz_domain::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`CompletionClient`](crate::CompletionClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Sampling settings passed through to the completion model
    pub generation: GenerationConfig,

    /// Pause before retrying the same credential after a non-quota failure
    /// (seconds)
    pub retry_backoff_secs: u64,
}

impl ClientConfig {
    /// Get the retry backoff as a Duration.
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_secs(self.retry_backoff_secs)
    }

    /// Zero-delay preset for tests.
    pub fn no_backoff() -> Self {
        Self {
            retry_backoff_secs: 0,
            ..Self::default()
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.generation.max_output_tokens == 0 {
            return Err("max_output_tokens must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err("temperature must be within [0.0, 2.0]".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {e}"))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {e}"))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            retry_backoff_secs: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_backoff_is_two_seconds() {
        assert_eq!(ClientConfig::default().retry_backoff(), Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_max_output_tokens() {
        let mut config = ClientConfig::default();
        config.generation.max_output_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_temperature() {
        let mut config = ClientConfig::default();
        config.generation.temperature = 3.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ClientConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ClientConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.retry_backoff_secs, parsed.retry_backoff_secs);
        assert_eq!(
            config.generation.max_output_tokens,
            parsed.generation.max_output_tokens
        );
    }
}
