//! Kagaz Batch Pipelines
//!
//! The two batch orchestrators of the digitization system:
//!
//! ```text
//! source dir ──TextPipeline──▶ <base>.txt ──RecordPipeline──▶ <base>.json
//! ```
//!
//! - [`TextPipeline`] walks a flat input directory, dispatches each
//!   supported file to its extraction strategy and persists the rendered
//!   text — even when extraction produced nothing. Unsupported extensions
//!   are skipped silently.
//! - [`RecordPipeline`] runs each text artifact through the completion
//!   client, sanitizes and parses the response, validates the schema and
//!   persists the pretty-printed record, throttling between items.
//!
//! Both accumulate a [`ProcessingStats`](kagaz_domain::ProcessingStats)
//! owned by the single run: per-item failures are recorded and the batch
//! continues; only an empty credential pool aborts a run, and it does so
//! before the first item.

#![warn(missing_docs)]

mod config;
mod error;
mod record;
mod text;

pub use config::RecordPipelineConfig;
pub use error::PipelineError;
pub use record::RecordPipeline;
pub use text::TextPipeline;
