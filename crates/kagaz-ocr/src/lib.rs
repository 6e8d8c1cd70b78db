//! Kagaz OCR Adapter Layer
//!
//! Implementations of the `OcrEngine` trait from `kagaz-domain`.
//!
//! # Engines
//!
//! - `MockOcr`: deterministic mock for testing
//! - `TesseractOcr`: Tesseract via leptess, behind the `tesseract` feature
//!   (building it needs the system libtesseract/libleptonica packages)
//!
//! # Examples
//!
//! ```
//! use kagaz_ocr::MockOcr;
//! use kagaz_domain::traits::OcrEngine;
//!
//! let ocr = MockOcr::echo();
//! let text = ocr.image_to_text(b"scanned text", "eng").unwrap();
//! assert_eq!(text, "scanned text");
//! ```

#![warn(missing_docs)]

#[cfg(feature = "tesseract")]
pub mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::TesseractOcr;

use kagaz_domain::traits::OcrEngine;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors that can occur during OCR
#[derive(Error, Debug)]
pub enum OcrError {
    /// Engine initialization failed (missing language data, bad install)
    #[error("OCR engine initialization failed: {0}")]
    Init(String),

    /// The input bytes are not a readable raster image
    #[error("unreadable image: {0}")]
    UnreadableImage(String),

    /// Text recognition failed
    #[error("recognition failed: {0}")]
    Recognition(String),
}

/// Placeholder engine for builds without an OCR backend compiled in.
///
/// Every call fails with [`OcrError::Init`]; the extraction strategies
/// absorb that into empty-with-reason segments, so a tesseract-less build
/// still processes text-layer documents end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledOcr;

impl DisabledOcr {
    /// Create the placeholder engine.
    pub fn new() -> Self {
        Self
    }
}

impl OcrEngine for DisabledOcr {
    type Error = OcrError;

    fn image_to_text(&self, _image: &[u8], _language: &str) -> Result<String, Self::Error> {
        Err(OcrError::Init(
            "OCR support not compiled in (enable the `tesseract` feature)".to_string(),
        ))
    }
}

/// Mock OCR engine for deterministic testing.
///
/// By default it "recognizes" the image bytes as UTF-8 text, which lets
/// tests feed fake images whose content is the expected OCR output.
/// Specific byte patterns can be mapped to fixed responses or to failures.
///
/// # Examples
///
/// ```
/// use kagaz_ocr::MockOcr;
/// use kagaz_domain::traits::OcrEngine;
///
/// let mut ocr = MockOcr::echo();
/// ocr.add_response(b"raw-bytes".to_vec(), "Name: Asha");
/// assert_eq!(ocr.image_to_text(b"raw-bytes", "eng").unwrap(), "Name: Asha");
/// assert_eq!(ocr.image_to_text(b"anything else", "eng").unwrap(), "anything else");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockOcr {
    responses: Arc<Mutex<HashMap<Vec<u8>, Response>>>,
    call_count: Arc<Mutex<usize>>,
}

#[derive(Debug, Clone)]
enum Response {
    Text(String),
    Failure(String),
}

impl MockOcr {
    /// A mock that echoes image bytes back as UTF-8 text.
    pub fn echo() -> Self {
        Self::default()
    }

    /// Map a specific image to a fixed recognition result.
    pub fn add_response(&mut self, image: Vec<u8>, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(image, Response::Text(text.into()));
    }

    /// Map a specific image to a recognition failure.
    pub fn add_failure(&mut self, image: Vec<u8>, reason: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(image, Response::Failure(reason.into()));
    }

    /// Number of times the engine has been invoked.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl OcrEngine for MockOcr {
    type Error = OcrError;

    fn image_to_text(&self, image: &[u8], _language: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(response) = self.responses.lock().unwrap().get(image) {
            return match response {
                Response::Text(text) => Ok(text.clone()),
                Response::Failure(reason) => Err(OcrError::Recognition(reason.clone())),
            };
        }

        Ok(String::from_utf8_lossy(image).into_owned())
    }
}
