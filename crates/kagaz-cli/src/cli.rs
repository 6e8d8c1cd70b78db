//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use kagaz_llm::gemini::DEFAULT_MODEL;
use std::path::PathBuf;

/// Kagaz CLI - digitize identity documents into structured records.
#[derive(Debug, Parser)]
#[command(name = "kagaz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract normalized text from a directory of source documents
    ExtractText(ExtractTextArgs),

    /// Convert text artifacts into structured identity records
    Convert(ConvertArgs),

    /// Run both stages back to back
    Run(RunArgs),
}

/// Arguments for the extract-text command.
#[derive(Debug, Parser)]
pub struct ExtractTextArgs {
    /// Directory of source documents (flat; unsupported extensions are
    /// skipped)
    #[arg(short, long, default_value = "aadhar")]
    pub input: PathBuf,

    /// Directory for the text artifacts
    #[arg(short, long, default_value = "aadhar_txt")]
    pub output: PathBuf,

    /// OCR language tag
    #[arg(long, default_value = "eng")]
    pub ocr_language: String,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Directory of text artifacts
    #[arg(short, long, default_value = "aadhar_txt")]
    pub input: PathBuf,

    /// Directory for the record artifacts
    #[arg(short, long, default_value = "aadhar_data")]
    pub output: PathBuf,

    /// Completion model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Service credential; repeat for a rotation pool. Falls back to the
    /// GEMINI_API_KEY_1, GEMINI_API_KEY_2, ... environment variables.
    #[arg(long = "api-key")]
    pub api_keys: Vec<String>,

    /// Seconds to pause between items
    #[arg(long, default_value_t = 1)]
    pub throttle_secs: u64,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Directory of source documents
    #[arg(short, long, default_value = "aadhar")]
    pub input: PathBuf,

    /// Directory for the intermediate text artifacts
    #[arg(long, default_value = "aadhar_txt")]
    pub text_dir: PathBuf,

    /// Directory for the record artifacts
    #[arg(short, long, default_value = "aadhar_data")]
    pub output: PathBuf,

    /// OCR language tag
    #[arg(long, default_value = "eng")]
    pub ocr_language: String,

    /// Completion model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Service credential; repeat for a rotation pool
    #[arg(long = "api-key")]
    pub api_keys: Vec<String>,

    /// Seconds to pause between items
    #[arg(long, default_value_t = 1)]
    pub throttle_secs: u64,
}
