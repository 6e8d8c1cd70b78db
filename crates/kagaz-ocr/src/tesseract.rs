//! Tesseract OCR engine via leptess
//!
//! A fresh `LepTess` instance is created per call: initialization is cheap
//! relative to recognition, and it keeps the engine `Sync` without interior
//! locking.

use crate::OcrError;
use kagaz_domain::traits::OcrEngine;
use leptess::LepTess;
use tracing::debug;

/// Tesseract-backed OCR.
///
/// `datapath` overrides the tessdata directory; `None` uses the system
/// default (`TESSDATA_PREFIX` or the distro install location).
#[derive(Debug, Clone, Default)]
pub struct TesseractOcr {
    datapath: Option<String>,
}

impl TesseractOcr {
    /// OCR against the system tessdata installation.
    pub fn new() -> Self {
        Self::default()
    }

    /// OCR against an explicit tessdata directory.
    pub fn with_datapath(datapath: impl Into<String>) -> Self {
        Self {
            datapath: Some(datapath.into()),
        }
    }
}

impl OcrEngine for TesseractOcr {
    type Error = OcrError;

    fn image_to_text(&self, image: &[u8], language: &str) -> Result<String, Self::Error> {
        let mut engine = LepTess::new(self.datapath.as_deref(), language)
            .map_err(|e| OcrError::Init(e.to_string()))?;

        engine
            .set_image_from_mem(image)
            .map_err(|e| OcrError::UnreadableImage(e.to_string()))?;

        let text = engine
            .get_utf8_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        debug!(bytes = image.len(), chars = text.len(), "tesseract recognition complete");

        Ok(text)
    }
}
