//! Source document format detection

use std::path::Path;

/// File extensions the pipeline accepts, lower-case, without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "pdf", "docx", "txt", "png", "jpg", "jpeg", "tiff", "bmp",
];

/// Classification of a source document by file extension.
///
/// Detection is a pure extension lookup against the fixed allow-list in
/// [`SUPPORTED_EXTENSIONS`]; nothing inspects file content. Files outside
/// the allow-list map to [`DocumentFormat::Unsupported`] and are silently
/// skipped by the batch orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format (`.pdf`)
    Pdf,
    /// Microsoft Word document (`.docx`)
    Docx,
    /// Plain text (`.txt`)
    PlainText,
    /// Raster image (`.png`, `.jpg`, `.jpeg`, `.tiff`, `.bmp`)
    Image,
    /// Anything else
    Unsupported,
}

impl DocumentFormat {
    /// Detect the format of a file from its name or path.
    ///
    /// # Examples
    ///
    /// ```
    /// use kagaz_domain::DocumentFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("card.PDF")), DocumentFormat::Pdf);
    /// assert_eq!(DocumentFormat::from_path(Path::new("scan.jpeg")), DocumentFormat::Image);
    /// assert_eq!(DocumentFormat::from_path(Path::new("notes.md")), DocumentFormat::Unsupported);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::PlainText,
            "png" | "jpg" | "jpeg" | "tiff" | "bmp" => Self::Image,
            _ => Self::Unsupported,
        }
    }

    /// Whether the orchestrator has a strategy for this format.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Short lower-case tag for diagnostics and logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "text",
            Self::Image => "image",
            Self::Unsupported => "unsupported",
        }
    }
}
