//! Text-completion capability contract: generation knobs and the
//! failure-kind taxonomy providers must classify into

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling and output-length settings for a completion call.
///
/// Extraction wants deterministic-leaning output with a hard size bound,
/// so the defaults sit at the low-temperature end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature; lower is more deterministic
    pub temperature: f32,
    /// Hard cap on generated tokens
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: 2048,
        }
    }
}

/// Classified failure from a completion provider.
///
/// The rotation logic in the completion client branches on this enum, never
/// on message text: `RateLimited` rotates to the next credential and retries
/// immediately, everything else backs off and retries with the same
/// credential. Providers are required to classify their own failures;
/// substring matching on messages is a compatibility shim that belongs in
/// the provider, not here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Quota or rate-limit exhaustion on the active credential
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Transient failure worth retrying after a pause (network, 5xx, timeout)
    #[error("transient failure: {0}")]
    Transient(String),

    /// Failure that a retry with the same inputs will not fix
    #[error("fatal failure: {0}")]
    Fatal(String),
}

impl CompletionError {
    /// Whether this failure should trigger credential rotation.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }

    /// The provider's underlying message.
    pub fn message(&self) -> &str {
        match self {
            Self::RateLimited(m) | Self::Transient(m) | Self::Fatal(m) => m,
        }
    }
}
