//! Kagaz Structured Extractor
//!
//! Converts normalized document text into validated identity records
//! through a text-completion service.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → CompletionClient (credential rotation) →
//!   sanitize_response → serde_json → validate_record → IdentityRecord JSON
//! ```
//!
//! # Key Features
//!
//! - **Prompt Engineering**: a fixed template enumerating the record schema
//!   and formatting directives
//! - **Credential Rotation**: quota failures rotate cyclically through the
//!   pool and retry immediately; other failures back off and retry with the
//!   same credential; exhaustion yields `None`, a normal outcome
//! - **Response Sanitization**: a small fence grammar strips markdown
//!   wrapping and surrounding prose
//! - **Schema Validation**: required-key and address-shape checks before an
//!   artifact is written
//!
//! # Example Usage
//!
//! ```
//! use kagaz_extractor::{ClientConfig, CompletionClient, CredentialPool};
//! use kagaz_extractor::{sanitize_response, validate_record};
//! use kagaz_llm::MockModel;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let model = MockModel::new(
//!     r#"{"aadhar_number": null, "name": "Asha", "date_of_birth": null, "gender": "Female"}"#,
//! );
//! let pool = CredentialPool::new(vec!["key-1".into(), "key-2".into()])?;
//! let mut client = CompletionClient::new(model, pool, ClientConfig::default());
//!
//! let raw = client.complete("Name: Asha  Gender: Female").await.unwrap();
//! let value: serde_json::Value = serde_json::from_str(&sanitize_response(&raw))?;
//! validate_record(&value)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
mod pool;
mod prompt;
mod sanitize;
mod validate;

pub use client::CompletionClient;
pub use config::ClientConfig;
pub use error::ExtractorError;
pub use pool::CredentialPool;
pub use prompt::PromptBuilder;
pub use sanitize::sanitize_response;
pub use validate::{validate_record, SchemaViolation};
