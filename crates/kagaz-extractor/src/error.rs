//! Error types for the structured extractor

use thiserror::Error;

/// Errors that can occur while setting up structured extraction.
///
/// Per-document failures never surface here: an exhausted completion run
/// is a `None` from the client, and malformed responses are recorded as
/// batch statistics by the orchestrator.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The credential pool was empty; the run cannot start
    #[error("no credentials configured")]
    NoCredentials,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
