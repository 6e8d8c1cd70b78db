//! Kagaz Document Layer
//!
//! Turns heterogeneous source documents into origin-tagged plain text.
//!
//! # Overview
//!
//! This crate implements the `PdfEngine` and `DocxEngine` capability traits
//! from `kagaz-domain` and composes them, together with an injected
//! `OcrEngine`, into per-format extraction strategies:
//!
//! ```text
//! PDF  → layout text + linearized tables → OCR fallback ← 50-char threshold
//!        └ embedded-image OCR appended either way
//! DOCX → paragraphs + linearized tables
//! TXT  → lossy UTF-8 read
//! IMG  → whole-image OCR
//! ```
//!
//! # Failure policy
//!
//! Strategies never propagate engine errors. A failed unit (page, image,
//! whole document) becomes an explicit empty-with-reason segment in the
//! result, so the batch orchestrator always has text to persist and tests
//! can tell a broken engine from a blank page.
//!
//! # Engines
//!
//! - `PdfiumEngine`: pdfium-render against the system pdfium library
//! - `ZipDocxEngine`: ZIP + `word/document.xml` event parse
//! - `MockPdfEngine` / `MockDocxEngine`: scripted fixtures for tests

#![warn(missing_docs)]

mod docx;
mod error;
mod mock;
mod pdfium;
mod strategy;

pub use docx::ZipDocxEngine;
pub use error::DocumentError;
pub use mock::{MockDocxEngine, MockFailure, MockPdfEngine, MockPdfPage};
pub use pdfium::PdfiumEngine;
pub use strategy::{default_extractor, DefaultTextExtractor, ExtractionConfig, TextExtractor};
