//! Kagaz Completion Provider Layer
//!
//! Implementations of the `CompletionModel` trait from `kagaz-domain`.
//!
//! # Providers
//!
//! - `MockModel`: deterministic mock with scriptable outcome sequences
//! - `GeminiModel`: Google Generative Language API integration
//!
//! Providers classify their own failures into
//! [`CompletionError`](kagaz_domain::CompletionError); the substring
//! heuristic in [`classify_failure`] exists only for services that hand
//! back nothing but a message.
//!
//! # Examples
//!
//! ```
//! use kagaz_llm::MockModel;
//! use kagaz_domain::traits::CompletionModel;
//! use kagaz_domain::GenerationConfig;
//!
//! let model = MockModel::new("{\"name\": \"Asha\"}");
//! let out = model.generate("prompt", "key-1", &GenerationConfig::default()).unwrap();
//! assert_eq!(out, "{\"name\": \"Asha\"}");
//! ```

#![warn(missing_docs)]

pub mod gemini;

pub use gemini::GeminiModel;

use kagaz_domain::traits::CompletionModel;
use kagaz_domain::{CompletionError, GenerationConfig};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Compatibility shim: classify a bare failure message by substring.
///
/// Quota and rate-limit conditions are recognized the way the upstream
/// services phrase them (`quota`, `limit`, case-insensitive); everything
/// else is assumed transient and worth a delayed retry. Providers that
/// receive structured status codes should classify directly and skip this.
pub fn classify_failure(message: impl Into<String>) -> CompletionError {
    let message = message.into();
    let lowered = message.to_lowercase();
    if lowered.contains("quota") || lowered.contains("limit") {
        CompletionError::RateLimited(message)
    } else {
        CompletionError::Transient(message)
    }
}

/// Mock completion model for deterministic testing.
///
/// Outcomes queue up in call order; once the queue drains, every further
/// call returns the default response. Credentials seen per call are
/// recorded so rotation behavior can be asserted.
///
/// # Examples
///
/// ```
/// use kagaz_llm::MockModel;
/// use kagaz_domain::traits::CompletionModel;
/// use kagaz_domain::{CompletionError, GenerationConfig};
///
/// let model = MockModel::new("fallback");
/// model.push_err(CompletionError::RateLimited("quota exceeded".into()));
/// model.push_ok("first real answer");
///
/// let config = GenerationConfig::default();
/// assert!(model.generate("p", "key-1", &config).is_err());
/// assert_eq!(model.generate("p", "key-2", &config).unwrap(), "first real answer");
/// assert_eq!(model.credentials_seen(), vec!["key-1", "key-2"]);
/// ```
#[derive(Debug, Clone)]
pub struct MockModel {
    default_response: String,
    outcomes: Arc<Mutex<VecDeque<Result<String, CompletionError>>>>,
    credentials: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    /// Create a mock returning `response` whenever the script is empty.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            credentials: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful completion.
    pub fn push_ok(&self, text: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a classified failure.
    pub fn push_err(&self, error: CompletionError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Credentials passed to `generate`, in call order.
    pub fn credentials_seen(&self) -> Vec<String> {
        self.credentials.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.credentials.lock().unwrap().len()
    }
}

impl Default for MockModel {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl CompletionModel for MockModel {
    fn generate(
        &self,
        _prompt: &str,
        credential: &str,
        _config: &GenerationConfig,
    ) -> Result<String, CompletionError> {
        self.credentials.lock().unwrap().push(credential.to_string());

        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GenerationConfig {
        GenerationConfig::default()
    }

    #[test]
    fn test_classify_quota_messages_as_rate_limited() {
        assert!(classify_failure("Quota exceeded for project").is_rate_limited());
        assert!(classify_failure("resource LIMIT reached").is_rate_limited());
    }

    #[test]
    fn test_classify_other_messages_as_transient() {
        let err = classify_failure("connection reset by peer");
        assert!(matches!(err, CompletionError::Transient(_)));
    }

    #[test]
    fn test_mock_default_response() {
        let model = MockModel::new("hello");
        assert_eq!(model.generate("p", "k", &config()).unwrap(), "hello");
    }

    #[test]
    fn test_mock_scripted_sequence_in_order() {
        let model = MockModel::new("default");
        model.push_err(CompletionError::Transient("blip".into()));
        model.push_ok("answer");

        assert!(model.generate("p", "k", &config()).is_err());
        assert_eq!(model.generate("p", "k", &config()).unwrap(), "answer");
        assert_eq!(model.generate("p", "k", &config()).unwrap(), "default");
    }

    #[test]
    fn test_mock_records_credentials() {
        let model = MockModel::default();
        model.generate("p", "key-a", &config()).unwrap();
        model.generate("p", "key-b", &config()).unwrap();
        assert_eq!(model.credentials_seen(), vec!["key-a", "key-b"]);
        assert_eq!(model.call_count(), 2);
    }

    #[test]
    fn test_mock_clones_share_script() {
        let model = MockModel::default();
        let clone = model.clone();
        model.push_ok("from original");
        assert_eq!(clone.generate("p", "k", &config()).unwrap(), "from original");
    }
}
