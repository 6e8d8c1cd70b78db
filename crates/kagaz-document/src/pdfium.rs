//! PDF engine backed by pdfium-render
//!
//! Binds the pdfium dynamic library at runtime: first a copy next to the
//! executable, then the system-wide installation. pdfium has no notion of
//! tables, so `page_tables` always reports none; table linearization is
//! exercised through the DOCX path and the mock engines.

use crate::DocumentError;
use image::{DynamicImage, ImageFormat};
use kagaz_domain::table::Table;
use kagaz_domain::traits::{EncodedImage, PdfEngine};
use pdfium_render::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::warn;

/// Points per inch in PDF user space.
const PDF_POINTS_PER_INCH: f32 = 72.0;

/// pdfium-backed [`PdfEngine`].
pub struct PdfiumEngine {
    pdfium: Pdfium,
}

impl PdfiumEngine {
    /// Bind pdfium from the executable's directory or the system library
    /// path.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Open`] when no pdfium library can be bound.
    pub fn new() -> Result<Self, DocumentError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| DocumentError::Open(format!("pdfium library not available: {e:?}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }

    fn open(&self, path: &Path) -> Result<PdfDocument<'_>, DocumentError> {
        self.pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| DocumentError::Open(format!("{e:?}")))
    }
}

impl PdfEngine for PdfiumEngine {
    type Error = DocumentError;

    fn page_texts(&self, path: &Path) -> Result<Vec<Result<String, Self::Error>>, Self::Error> {
        let document = self.open(path)?;

        let pages = document
            .pages()
            .iter()
            .map(|page| {
                page.text()
                    .map(|text| text.all())
                    .map_err(|e| DocumentError::Pdf(format!("{e:?}")))
            })
            .collect();

        Ok(pages)
    }

    fn page_tables(&self, path: &Path) -> Result<Vec<Vec<Table>>, Self::Error> {
        let document = self.open(path)?;

        // pdfium exposes text and objects, not table structure.
        Ok(vec![Vec::new(); document.pages().len() as usize])
    }

    fn page_images(&self, path: &Path) -> Result<Vec<Vec<EncodedImage>>, Self::Error> {
        let document = self.open(path)?;

        let mut pages = Vec::with_capacity(document.pages().len() as usize);
        for page in document.pages().iter() {
            let mut images = Vec::new();
            for object in page.objects().iter() {
                let Some(image_object) = object.as_image_object() else {
                    continue;
                };
                match image_object.get_raw_image() {
                    Ok(raw) => match encode_png(&raw) {
                        Ok(bytes) => images.push(bytes),
                        Err(e) => warn!(error = %e, "skipping unencodable embedded image"),
                    },
                    Err(e) => warn!(error = ?e, "skipping unreadable embedded image"),
                }
            }
            pages.push(images);
        }

        Ok(pages)
    }

    fn render_pages(
        &self,
        path: &Path,
        dpi: u32,
    ) -> Result<Vec<Result<EncodedImage, Self::Error>>, Self::Error> {
        let document = self.open(path)?;
        let config = PdfRenderConfig::new().scale_page_by_factor(dpi as f32 / PDF_POINTS_PER_INCH);

        let pages = document
            .pages()
            .iter()
            .map(|page| {
                page.render_with_config(&config)
                    .map_err(|e| DocumentError::Pdf(format!("{e:?}")))
                    .and_then(|bitmap| encode_png(&bitmap.as_image()))
            })
            .collect();

        Ok(pages)
    }
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, DocumentError> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| DocumentError::ImageEncoding(e.to_string()))?;
    Ok(bytes.into_inner())
}
