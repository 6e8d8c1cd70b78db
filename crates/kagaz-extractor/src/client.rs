//! Completion client with credential rotation and backoff

use crate::config::ClientConfig;
use crate::pool::CredentialPool;
use crate::prompt::PromptBuilder;
use kagaz_domain::traits::CompletionModel;
use kagaz_domain::CompletionError;
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives the completion model through the credential pool.
///
/// One attempt per pool entry: a rate-limited attempt rotates to the next
/// credential and retries immediately, any other failure sleeps the
/// configured backoff and retries with the same credential. Exhausting the
/// full rotation yields `None` — a normal, non-fatal outcome the caller
/// records and moves past. The rotation cursor persists across calls
/// within a run; it is never reset per document.
pub struct CompletionClient<M>
where
    M: CompletionModel,
{
    model: Arc<M>,
    pool: CredentialPool,
    config: ClientConfig,
}

impl<M> CompletionClient<M>
where
    M: CompletionModel + Send + Sync + 'static,
{
    /// Create a client over a model and a non-empty credential pool.
    pub fn new(model: M, pool: CredentialPool, config: ClientConfig) -> Self {
        Self {
            model: Arc::new(model),
            pool,
            config,
        }
    }

    /// Run one document's text through the completion service.
    ///
    /// Returns the raw completion text, or `None` when every attempt
    /// across the full credential rotation failed.
    pub async fn complete(&mut self, text: &str) -> Option<String> {
        let prompt = PromptBuilder::new(text).build();

        debug!(prompt_chars = prompt.len(), "requesting completion");

        for attempt in 0..self.pool.len() {
            let credential = self.pool.active().to_string();

            match self.call_model(&prompt, &credential).await {
                Ok(completion) => {
                    debug!(attempt = attempt + 1, "completion succeeded");
                    return Some(completion);
                }
                Err(e) if e.is_rate_limited() => {
                    warn!(attempt = attempt + 1, "credential exhausted, rotating");
                    self.pool.rotate();
                }
                Err(e) => {
                    warn!(attempt = attempt + 1, error = %e, "completion failed, backing off");
                    tokio::time::sleep(self.config.retry_backoff()).await;
                }
            }
        }

        warn!(attempts = self.pool.len(), "all completion attempts exhausted");
        None
    }

    /// Call the completion model in a blocking context.
    async fn call_model(
        &self,
        prompt: &str,
        credential: &str,
    ) -> Result<String, CompletionError> {
        let model = Arc::clone(&self.model);
        let prompt = prompt.to_string();
        let credential = credential.to_string();
        let generation = self.config.generation;

        tokio::task::spawn_blocking(move || model.generate(&prompt, &credential, &generation))
            .await
            .map_err(|e| CompletionError::Fatal(format!("task join error: {e}")))?
    }

    /// The credential pool (cursor included), mainly for diagnostics.
    pub fn pool(&self) -> &CredentialPool {
        &self.pool
    }
}
