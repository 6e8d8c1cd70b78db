//! Per-format extraction strategies and the format router

use crate::DocumentError;
use kagaz_domain::traits::{DocxEngine, OcrEngine, PdfEngine};
use kagaz_domain::{DocumentFormat, ExtractedText, PageSegment, SegmentOrigin, Table};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Tunables for the extraction strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// OCR language tag passed to the engine
    pub ocr_language: String,

    /// Minimum non-whitespace characters the PDF layout branch must yield;
    /// below this the whole document is re-processed through OCR
    pub min_layout_chars: usize,

    /// Rasterization resolution for the PDF OCR fallback
    pub render_dpi: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            ocr_language: "eng".to_string(),
            min_layout_chars: 50,
            render_dpi: 300,
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.ocr_language.is_empty() {
            return Err("ocr_language must not be empty".to_string());
        }
        if self.render_dpi == 0 {
            return Err("render_dpi must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// The multi-strategy text extractor.
///
/// Holds the injected document engines and the OCR capability, and turns a
/// source file of any supported format into [`ExtractedText`]. Strategies
/// never return errors: a failed unit (page, image, whole document) becomes
/// an empty segment carrying the engine's reason.
pub struct TextExtractor<P, D, O>
where
    P: PdfEngine,
    D: DocxEngine,
    O: OcrEngine,
{
    pdf: P,
    docx: D,
    ocr: O,
    config: ExtractionConfig,
}

impl<P, D, O> TextExtractor<P, D, O>
where
    P: PdfEngine,
    D: DocxEngine,
    O: OcrEngine,
    P::Error: Display,
    D::Error: Display,
    O::Error: Display,
{
    /// Create an extractor over the given engines.
    pub fn new(pdf: P, docx: D, ocr: O, config: ExtractionConfig) -> Self {
        Self {
            pdf,
            docx,
            ocr,
            config,
        }
    }

    /// Dispatch to the strategy matching `format`.
    ///
    /// `Unsupported` yields an empty result; the batch orchestrator filters
    /// those files out before dispatching.
    pub fn extract(&self, path: &Path, format: DocumentFormat) -> ExtractedText {
        match format {
            DocumentFormat::Pdf => self.extract_pdf(path),
            DocumentFormat::Docx => self.extract_docx(path),
            DocumentFormat::PlainText => self.extract_plain_text(path),
            DocumentFormat::Image => self.extract_image(path),
            DocumentFormat::Unsupported => ExtractedText::default(),
        }
    }

    /// PDF strategy: layout text + tables per page, wholesale OCR fallback
    /// when the layout branch comes up near-empty, embedded-image OCR
    /// appended either way.
    pub fn extract_pdf(&self, path: &Path) -> ExtractedText {
        let mut primary = ExtractedText::paginated();

        // Layout branch: per-page text with tables appended inline.
        match self.pdf.page_texts(path) {
            Ok(pages) => {
                let tables = self.pdf.page_tables(path).unwrap_or_else(|e| {
                    warn!(error = %e, "table extraction failed, continuing without tables");
                    Vec::new()
                });

                for (index, page_text) in pages.into_iter().enumerate() {
                    let mut segment = match page_text {
                        Ok(text) => PageSegment::ok(index, SegmentOrigin::Layout, text),
                        Err(e) => {
                            warn!(page = index + 1, error = %e, "page text extraction failed");
                            PageSegment::failed(index, SegmentOrigin::Layout, e.to_string())
                        }
                    };
                    if let Some(page_tables) = tables.get(index) {
                        append_tables(&mut segment.text, page_tables);
                    }
                    primary.push(segment);
                }
            }
            Err(e) => {
                warn!(error = %e, "PDF layout extraction failed");
                primary.push(PageSegment::failed(0, SegmentOrigin::Layout, e.to_string()));
            }
        }

        // OCR fallback: below the threshold the layout result is discarded
        // wholesale and every page is rasterized and recognized instead.
        if primary.visible_len() < self.config.min_layout_chars {
            debug!(
                chars = primary.visible_len(),
                threshold = self.config.min_layout_chars,
                "layout text below threshold, falling back to OCR"
            );
            match self.pdf.render_pages(path, self.config.render_dpi) {
                Ok(rendered) => {
                    let mut ocr_text = ExtractedText::paginated();
                    for (index, rendered_page) in rendered.into_iter().enumerate() {
                        let segment = match rendered_page {
                            Ok(image) => {
                                match self.ocr.image_to_text(&image, &self.config.ocr_language) {
                                    Ok(text) => PageSegment::ok(index, SegmentOrigin::Ocr, text),
                                    Err(e) => {
                                        warn!(page = index + 1, error = %e, "page OCR failed");
                                        PageSegment::failed(
                                            index,
                                            SegmentOrigin::Ocr,
                                            e.to_string(),
                                        )
                                    }
                                }
                            }
                            Err(e) => {
                                warn!(page = index + 1, error = %e, "page rasterization failed");
                                PageSegment::failed(index, SegmentOrigin::Ocr, e.to_string())
                            }
                        };
                        ocr_text.push(segment);
                    }
                    primary = ocr_text;
                }
                Err(e) => {
                    // Keep whatever the layout branch produced.
                    warn!(error = %e, "OCR fallback unavailable");
                }
            }
        }

        // Embedded images are recognized and appended after the primary
        // result regardless of which branch produced it.
        match self.pdf.page_images(path) {
            Ok(pages) => {
                for (index, images) in pages.into_iter().enumerate() {
                    if images.is_empty() {
                        continue;
                    }
                    let mut section = String::new();
                    let mut failure = None;
                    for (n, image) in images.iter().enumerate() {
                        match self.ocr.image_to_text(image, &self.config.ocr_language) {
                            Ok(text) if !text.trim().is_empty() => {
                                section.push_str(&format!("\nImage {} text:\n{}\n", n + 1, text));
                            }
                            Ok(_) => {}
                            Err(e) => {
                                warn!(page = index + 1, image = n + 1, error = %e, "embedded image OCR failed");
                                failure = Some(e.to_string());
                            }
                        }
                    }
                    primary.push(PageSegment {
                        page_index: index,
                        origin: SegmentOrigin::EmbeddedImageOcr,
                        text: section,
                        error: failure,
                    });
                }
            }
            Err(e) => warn!(error = %e, "embedded image extraction failed"),
        }

        primary
    }

    /// DOCX strategy: paragraph text in document order, then every table
    /// linearized. Fails closed to an empty result on any engine error.
    pub fn extract_docx(&self, path: &Path) -> ExtractedText {
        let paragraphs = match self.docx.paragraphs(path) {
            Ok(paragraphs) => paragraphs,
            Err(e) => {
                warn!(error = %e, "DOCX paragraph extraction failed");
                return ExtractedText::failed(SegmentOrigin::Layout, e.to_string());
            }
        };
        let tables = match self.docx.tables(path) {
            Ok(tables) => tables,
            Err(e) => {
                warn!(error = %e, "DOCX table extraction failed");
                return ExtractedText::failed(SegmentOrigin::Layout, e.to_string());
            }
        };

        let mut out = String::new();
        for paragraph in paragraphs {
            out.push_str(&paragraph);
            out.push('\n');
        }
        append_tables(&mut out, &tables);

        ExtractedText::single(SegmentOrigin::Layout, out)
    }

    /// Plain-text strategy: lossy UTF-8 read, undecodable bytes dropped.
    pub fn extract_plain_text(&self, path: &Path) -> ExtractedText {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "plain text read failed");
                return ExtractedText::failed(SegmentOrigin::Layout, e.to_string());
            }
        };

        let mut text = String::with_capacity(bytes.len());
        for chunk in bytes.utf8_chunks() {
            text.push_str(chunk.valid());
        }

        ExtractedText::single(SegmentOrigin::Layout, text)
    }

    /// Image strategy: OCR over the whole file.
    pub fn extract_image(&self, path: &Path) -> ExtractedText {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "image read failed");
                return ExtractedText::failed(SegmentOrigin::Ocr, e.to_string());
            }
        };

        match self.ocr.image_to_text(&bytes, &self.config.ocr_language) {
            Ok(text) => ExtractedText::single(SegmentOrigin::Ocr, text),
            Err(e) => {
                warn!(error = %e, "image OCR failed");
                ExtractedText::failed(SegmentOrigin::Ocr, e.to_string())
            }
        }
    }
}

/// Default extractor type wired to the real engines.
pub type DefaultTextExtractor<O> = TextExtractor<crate::PdfiumEngine, crate::ZipDocxEngine, O>;

/// Build an extractor over pdfium and the ZIP DOCX engine.
pub fn default_extractor<O>(ocr: O, config: ExtractionConfig) -> Result<DefaultTextExtractor<O>, DocumentError>
where
    O: OcrEngine,
    O::Error: Display,
{
    Ok(TextExtractor::new(
        crate::PdfiumEngine::new()?,
        crate::ZipDocxEngine::new(),
        ocr,
        config,
    ))
}

fn append_tables(out: &mut String, tables: &[Table]) {
    if tables.is_empty() {
        return;
    }
    out.push_str("\n[TABLES FOUND]\n");
    for (n, table) in tables.iter().enumerate() {
        out.push_str(&format!("\nTable {}:\n{}\n", n + 1, table.to_grid()));
    }
}
