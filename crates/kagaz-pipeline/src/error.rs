//! Error types for the batch pipelines

use kagaz_extractor::ExtractorError;
use thiserror::Error;

/// Errors that abort a batch before or outside per-item processing.
///
/// Per-item failures never raise: they land in the run's
/// `ProcessingStats` and the batch moves on.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input or output directory could not be read or created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured-extraction setup failed (no credentials)
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
}
