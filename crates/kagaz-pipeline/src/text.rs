//! Text-extraction batch orchestrator

use crate::PipelineError;
use kagaz_document::TextExtractor;
use kagaz_domain::traits::{DocxEngine, OcrEngine, PdfEngine};
use kagaz_domain::{DocumentFormat, ProcessingStats};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Walks a flat directory of source documents and persists one text
/// artifact per supported file.
///
/// `successful` counts completed writes — an empty extraction still
/// produces (and counts) an artifact. Files with unsupported extensions
/// are skipped without an error entry.
pub struct TextPipeline<P, D, O>
where
    P: PdfEngine,
    D: DocxEngine,
    O: OcrEngine,
{
    extractor: TextExtractor<P, D, O>,
}

impl<P, D, O> TextPipeline<P, D, O>
where
    P: PdfEngine,
    D: DocxEngine,
    O: OcrEngine,
    P::Error: Display,
    D::Error: Display,
    O::Error: Display,
{
    /// Create a pipeline over a configured extractor.
    pub fn new(extractor: TextExtractor<P, D, O>) -> Self {
        Self { extractor }
    }

    /// Process every supported file in `input_dir`, writing
    /// `<base>.txt` artifacts into `output_dir`.
    pub fn run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<ProcessingStats, PipelineError> {
        fs::create_dir_all(input_dir)?;
        fs::create_dir_all(output_dir)?;

        let mut entries: Vec<PathBuf> = fs::read_dir(input_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort();

        // Eligible count is fixed before any file is touched.
        let total = entries
            .iter()
            .filter(|path| DocumentFormat::from_path(path).is_supported())
            .count();
        let mut stats = ProcessingStats::new(total);

        info!(total, input = %input_dir.display(), "starting text extraction batch");

        for path in entries {
            let format = DocumentFormat::from_path(&path);
            if !format.is_supported() {
                debug!(file = %path.display(), "skipping unsupported extension");
                continue;
            }

            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            debug!(file = %file_name, format = format.label(), "extracting");
            let text = self.extractor.extract(&path, format);

            let artifact = output_dir.join(format!("{stem}.txt"));
            match fs::write(&artifact, text.render()) {
                Ok(()) => {
                    debug!(artifact = %artifact.display(), chars = text.visible_len(), "artifact written");
                    stats.record_success();
                }
                Err(e) => {
                    warn!(file = %file_name, error = %e, "artifact write failed");
                    stats.record_failure(format!("Failed to process {file_name}: {e}"));
                }
            }
        }

        info!("text extraction batch complete: {}", stats.summary());

        Ok(stats)
    }
}
