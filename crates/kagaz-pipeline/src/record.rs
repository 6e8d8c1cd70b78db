//! Structured-extraction batch orchestrator

use crate::{PipelineError, RecordPipelineConfig};
use kagaz_domain::traits::CompletionModel;
use kagaz_domain::ProcessingStats;
use kagaz_extractor::{sanitize_response, validate_record, CompletionClient, CredentialPool};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Converts text artifacts into validated identity-record JSON files.
///
/// Construction is the fatal gate: an empty credential list refuses to
/// build a pipeline, so a run can never start without a way to call the
/// service. Everything after that is per-item: a failed item records its
/// reason and the batch continues, separated by a fixed throttle.
pub struct RecordPipeline<M>
where
    M: CompletionModel,
{
    client: CompletionClient<M>,
    config: RecordPipelineConfig,
}

impl<M> RecordPipeline<M>
where
    M: CompletionModel + Send + Sync + 'static,
{
    /// Create a pipeline over a completion model and credential list.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Extractor`] when `credentials` is empty.
    pub fn new(
        model: M,
        credentials: Vec<String>,
        config: RecordPipelineConfig,
    ) -> Result<Self, PipelineError> {
        let pool = CredentialPool::new(credentials)?;
        let client = CompletionClient::new(model, pool, config.client.clone());
        Ok(Self { client, config })
    }

    /// Process every `.txt` artifact in `input_dir`, writing
    /// `<base>.json` records into `output_dir`.
    pub async fn run(
        &mut self,
        input_dir: &Path,
        output_dir: &Path,
    ) -> Result<ProcessingStats, PipelineError> {
        fs::create_dir_all(input_dir)?;
        fs::create_dir_all(output_dir)?;

        let mut artifacts: Vec<PathBuf> = fs::read_dir(input_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
            })
            .collect();
        artifacts.sort();

        let mut stats = ProcessingStats::new(artifacts.len());

        info!(total = stats.total, input = %input_dir.display(), "starting structured extraction batch");

        for path in artifacts {
            if self.process_one(&path, output_dir, &mut stats).await {
                stats.record_success();
            }

            // Fixed-rate throttle against the service, outcome-independent.
            tokio::time::sleep(self.config.throttle()).await;
        }

        info!("structured extraction batch complete: {}", stats.summary());

        Ok(stats)
    }

    /// Process one artifact. Returns true on success; failures are already
    /// recorded in `stats`.
    async fn process_one(
        &mut self,
        path: &Path,
        output_dir: &Path,
        stats: &mut ProcessingStats,
    ) -> bool {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %name, error = %e, "artifact read failed");
                stats.record_failure(format!("Error processing {name}: {e}"));
                return false;
            }
        };

        let Some(response) = self.client.complete(&text).await else {
            stats.record_failure(format!("AI failed to process {name}"));
            return false;
        };

        let cleaned = sanitize_response(&response);

        let value: Value = match serde_json::from_str(&cleaned) {
            Ok(value) => value,
            Err(e) => {
                warn!(file = %name, error = %e, "completion was not parseable JSON");
                stats.record_failure(format!("Invalid JSON from {name}"));
                return false;
            }
        };

        if let Err(violation) = validate_record(&value) {
            warn!(file = %name, %violation, "completion failed schema validation");
            stats.record_failure(format!("Invalid data structure from {name}"));
            return false;
        }

        // 2-space pretty print; serde_json leaves non-ASCII unescaped.
        let pretty = match serde_json::to_string_pretty(&value) {
            Ok(pretty) => pretty,
            Err(e) => {
                stats.record_failure(format!("Error processing {name}: {e}"));
                return false;
            }
        };

        let artifact = output_dir.join(format!("{stem}.json"));
        match fs::write(&artifact, pretty) {
            Ok(()) => {
                debug!(artifact = %artifact.display(), "record written");
                true
            }
            Err(e) => {
                warn!(file = %name, error = %e, "record write failed");
                stats.record_failure(format!("Error processing {name}: {e}"));
                false
            }
        }
    }

    /// The underlying client (rotation cursor included), for diagnostics.
    pub fn client(&self) -> &CompletionClient<M> {
        &self.client
    }
}
