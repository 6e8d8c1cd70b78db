//! Error types for document engines

use thiserror::Error;

/// Errors that can occur inside the PDF/DOCX engines.
///
/// Strategies absorb these into empty-with-reason segments; they only
/// surface directly to callers using an engine on its own.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document could not be opened or bound (missing library,
    /// malformed file, encryption)
    #[error("failed to open document: {0}")]
    Open(String),

    /// A PDF page operation failed
    #[error("PDF engine error: {0}")]
    Pdf(String),

    /// The DOCX archive or its XML was malformed
    #[error("DOCX error: {0}")]
    Docx(String),

    /// A rendered or embedded image could not be encoded
    #[error("image encoding error: {0}")]
    ImageEncoding(String),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
