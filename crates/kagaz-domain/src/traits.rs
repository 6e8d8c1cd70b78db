//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates (kagaz-document,
//! kagaz-ocr, kagaz-llm); the extraction strategies and the completion
//! client are written against these contracts only.

use crate::completion::{CompletionError, GenerationConfig};
use crate::table::Table;
use std::path::Path;

/// A raster image in any common encoded form (PNG, JPEG, BMP, ...).
pub type EncodedImage = Vec<u8>;

/// Optical character recognition over a raster image.
///
/// Implemented by the infrastructure layer (kagaz-ocr).
pub trait OcrEngine {
    /// Error type for OCR operations
    type Error;

    /// Derive text from an encoded raster image.
    ///
    /// Implementations should not fail for a well-formed raster; when they
    /// do fail, the caller absorbs the error into an empty-with-reason
    /// segment rather than propagating it.
    fn image_to_text(&self, image: &[u8], language: &str) -> Result<String, Self::Error>;
}

/// Page-level access to a PDF document.
///
/// Implemented by the infrastructure layer (kagaz-document). The per-page
/// `Result`s in [`page_texts`](PdfEngine::page_texts) and
/// [`render_pages`](PdfEngine::render_pages) keep single-page failures
/// page-scoped: one broken page yields one failed entry, not a failed
/// document.
pub trait PdfEngine {
    /// Error type for PDF operations
    type Error;

    /// Layout text per page, in page order.
    #[allow(clippy::type_complexity)]
    fn page_texts(&self, path: &Path) -> Result<Vec<Result<String, Self::Error>>, Self::Error>;

    /// Detected tables per page, in page order. A page without tables
    /// contributes an empty list.
    fn page_tables(&self, path: &Path) -> Result<Vec<Vec<Table>>, Self::Error>;

    /// Embedded raster images per page, in page order.
    fn page_images(&self, path: &Path) -> Result<Vec<Vec<EncodedImage>>, Self::Error>;

    /// Render each page to an encoded raster at the given DPI.
    #[allow(clippy::type_complexity)]
    fn render_pages(
        &self,
        path: &Path,
        dpi: u32,
    ) -> Result<Vec<Result<EncodedImage, Self::Error>>, Self::Error>;
}

/// Element-level access to a DOCX document.
///
/// Implemented by the infrastructure layer (kagaz-document).
pub trait DocxEngine {
    /// Error type for DOCX operations
    type Error;

    /// Paragraph text in document order.
    fn paragraphs(&self, path: &Path) -> Result<Vec<String>, Self::Error>;

    /// Tables in document order.
    fn tables(&self, path: &Path) -> Result<Vec<Table>, Self::Error>;
}

/// A text-completion service.
///
/// Implemented by the infrastructure layer (kagaz-llm). `credential` is an
/// opaque token from the caller's pool; implementations must classify
/// failures into [`CompletionError`] rather than returning silently
/// corrupted output.
pub trait CompletionModel {
    /// Generate a completion for `prompt` using the given credential.
    fn generate(
        &self,
        prompt: &str,
        credential: &str,
        config: &GenerationConfig,
    ) -> Result<String, CompletionError>;
}
