//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pipeline setup or batch error
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] kagaz_pipeline::PipelineError),

    /// Document engine setup error (missing pdfium, etc.)
    #[error("Document engine error: {0}")]
    Document(#[from] kagaz_document::DocumentError),

    /// Completion provider setup error
    #[error("Completion provider error: {0}")]
    Completion(#[from] kagaz_domain::CompletionError),

    /// No usable credentials were found
    #[error("No credentials found: pass --api-key or set {0}1, {0}2, ...")]
    NoCredentials(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
