//! Scripted document engines for deterministic testing
//!
//! These mocks ignore the path argument: a test configures one fixture
//! document per engine instance. They are exported (not test-gated) so the
//! pipeline crates can drive end-to-end scenarios without real documents.

use kagaz_domain::table::Table;
use kagaz_domain::traits::{DocxEngine, EncodedImage, PdfEngine};
use std::fmt;
use std::path::Path;

/// Display-able failure reason used by the mock engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFailure(pub String);

impl fmt::Display for MockFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MockFailure {
    fn from(reason: &str) -> Self {
        Self(reason.to_string())
    }
}

/// One scripted PDF page: its layout text (or a per-page failure), tables
/// and embedded images.
#[derive(Debug, Clone)]
pub struct MockPdfPage {
    text: Result<String, String>,
    tables: Vec<Table>,
    images: Vec<EncodedImage>,
}

impl Default for MockPdfPage {
    fn default() -> Self {
        Self {
            text: Ok(String::new()),
            tables: Vec::new(),
            images: Vec::new(),
        }
    }
}

impl MockPdfPage {
    /// A page whose layout extraction yields `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Ok(text.into()),
            ..Self::default()
        }
    }

    /// A page whose layout extraction fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            text: Err(reason.into()),
            ..Self::default()
        }
    }

    /// Attach a detected table.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Attach an embedded raster image.
    pub fn with_image(mut self, image: impl Into<EncodedImage>) -> Self {
        self.images.push(image.into());
        self
    }
}

/// Scripted [`PdfEngine`].
#[derive(Debug, Clone, Default)]
pub struct MockPdfEngine {
    pages: Vec<MockPdfPage>,
    rendered: Vec<Result<EncodedImage, String>>,
    open_failure: Option<String>,
    render_failure: Option<String>,
}

impl MockPdfEngine {
    /// An engine with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scripted page.
    pub fn with_page(mut self, page: MockPdfPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Append the raster produced when this page is rendered for OCR.
    pub fn with_rendered_page(mut self, image: impl Into<EncodedImage>) -> Self {
        self.rendered.push(Ok(image.into()));
        self
    }

    /// Append a page whose rasterization fails.
    pub fn with_failing_render(mut self, reason: impl Into<String>) -> Self {
        self.rendered.push(Err(reason.into()));
        self
    }

    /// Make every document-level operation fail (unopenable file).
    pub fn failing_open(mut self, reason: impl Into<String>) -> Self {
        self.open_failure = Some(reason.into());
        self
    }

    /// Make the whole rendering pass fail while text access still works.
    pub fn failing_render_pass(mut self, reason: impl Into<String>) -> Self {
        self.render_failure = Some(reason.into());
        self
    }

    fn check_open(&self) -> Result<(), MockFailure> {
        match &self.open_failure {
            Some(reason) => Err(MockFailure(reason.clone())),
            None => Ok(()),
        }
    }
}

impl PdfEngine for MockPdfEngine {
    type Error = MockFailure;

    fn page_texts(&self, _path: &Path) -> Result<Vec<Result<String, Self::Error>>, Self::Error> {
        self.check_open()?;
        Ok(self
            .pages
            .iter()
            .map(|p| p.text.clone().map_err(MockFailure))
            .collect())
    }

    fn page_tables(&self, _path: &Path) -> Result<Vec<Vec<Table>>, Self::Error> {
        self.check_open()?;
        Ok(self.pages.iter().map(|p| p.tables.clone()).collect())
    }

    fn page_images(&self, _path: &Path) -> Result<Vec<Vec<EncodedImage>>, Self::Error> {
        self.check_open()?;
        Ok(self.pages.iter().map(|p| p.images.clone()).collect())
    }

    fn render_pages(
        &self,
        _path: &Path,
        _dpi: u32,
    ) -> Result<Vec<Result<EncodedImage, Self::Error>>, Self::Error> {
        self.check_open()?;
        if let Some(reason) = &self.render_failure {
            return Err(MockFailure(reason.clone()));
        }
        Ok(self
            .rendered
            .iter()
            .map(|r| r.clone().map_err(MockFailure))
            .collect())
    }
}

/// Scripted [`DocxEngine`].
#[derive(Debug, Clone, Default)]
pub struct MockDocxEngine {
    paragraphs: Vec<String>,
    tables: Vec<Table>,
    failure: Option<String>,
}

impl MockDocxEngine {
    /// An engine returning no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn with_paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Append a table.
    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.push(table);
        self
    }

    /// Make every operation fail.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    fn check(&self) -> Result<(), MockFailure> {
        match &self.failure {
            Some(reason) => Err(MockFailure(reason.clone())),
            None => Ok(()),
        }
    }
}

impl DocxEngine for MockDocxEngine {
    type Error = MockFailure;

    fn paragraphs(&self, _path: &Path) -> Result<Vec<String>, Self::Error> {
        self.check()?;
        Ok(self.paragraphs.clone())
    }

    fn tables(&self, _path: &Path) -> Result<Vec<Table>, Self::Error> {
        self.check()?;
        Ok(self.tables.clone())
    }
}
