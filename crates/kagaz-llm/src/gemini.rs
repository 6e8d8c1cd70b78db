//! Gemini Provider Implementation
//!
//! Talks to the Google Generative Language REST API. Credentials are
//! supplied per call by the completion client, which owns the rotating
//! pool; this type holds no key state of its own.

use crate::classify_failure;
use kagaz_domain::traits::CompletionModel;
use kagaz_domain::{CompletionError, GenerationConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default model identifier (fast and cheap, good enough for field pulls).
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini API completion provider.
pub struct GeminiModel {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: ApiGenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct ApiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiModel {
    /// Create a provider for the given model identifier.
    pub fn new(model: impl Into<String>) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CompletionError::Fatal(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            client,
        })
    }

    /// Provider for the default flash model.
    pub fn flash() -> Result<Self, CompletionError> {
        Self::new(DEFAULT_MODEL)
    }

    /// Override the API base URL (testing, proxies).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Generate a completion using the Gemini API.
    ///
    /// # Errors
    ///
    /// Failures come back classified: HTTP 429 is `RateLimited`, server
    /// errors and network failures are `Transient`, other client errors go
    /// through the message shim, and an unreadable response body is
    /// `Fatal`.
    pub async fn generate(
        &self,
        prompt: &str,
        credential: &str,
        config: &GenerationConfig,
    ) -> Result<String, CompletionError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, credential
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: ApiGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| CompletionError::Transient(format!("request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::RateLimited(format!("HTTP 429: {body}")));
        }
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Transient(format!("HTTP {status}: {body}")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // 4xx bodies still carry quota phrasing on some routes
            return Err(classify_failure(format!("HTTP {status}: {body}")));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Fatal(format!("unreadable response body: {e}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| CompletionError::Fatal("response carried no candidates".to_string()))?;

        debug!(model = %self.model, chars = text.len(), "completion received");

        Ok(text)
    }
}

impl CompletionModel for GeminiModel {
    fn generate(
        &self,
        prompt: &str,
        credential: &str,
        config: &GenerationConfig,
    ) -> Result<String, CompletionError> {
        // Blocking wrapper for the async call; the completion client invokes
        // this from spawn_blocking.
        tokio::runtime::Runtime::new()
            .map_err(|e| CompletionError::Fatal(format!("runtime start failed: {e}")))?
            .block_on(async { self.generate(prompt, credential, config).await })
    }
}
