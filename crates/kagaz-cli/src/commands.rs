//! Command execution wiring

use crate::cli::{ConvertArgs, ExtractTextArgs, RunArgs};
use crate::credentials::{load_credentials, CREDENTIAL_ENV_PREFIX};
use crate::{CliError, Result};
use kagaz_document::{default_extractor, ExtractionConfig};
use kagaz_domain::ProcessingStats;
use kagaz_llm::GeminiModel;
use kagaz_pipeline::{RecordPipeline, RecordPipelineConfig, TextPipeline};

#[cfg(feature = "tesseract")]
use kagaz_ocr::TesseractOcr as DefaultOcr;

#[cfg(not(feature = "tesseract"))]
use kagaz_ocr::DisabledOcr as DefaultOcr;

/// Run the text-extraction stage.
pub fn execute_extract_text(args: ExtractTextArgs) -> Result<()> {
    let stats = extract_text(&args)?;
    print_stats("Text extraction", &stats);
    Ok(())
}

/// Run the structured-extraction stage.
pub async fn execute_convert(args: ConvertArgs) -> Result<()> {
    let stats = convert(&args).await?;
    print_stats("Structured extraction", &stats);
    Ok(())
}

/// Run both stages back to back.
pub async fn execute_run(args: RunArgs) -> Result<()> {
    let text_stats = extract_text(&ExtractTextArgs {
        input: args.input.clone(),
        output: args.text_dir.clone(),
        ocr_language: args.ocr_language.clone(),
    })?;
    print_stats("Text extraction", &text_stats);

    let convert_stats = convert(&ConvertArgs {
        input: args.text_dir.clone(),
        output: args.output.clone(),
        model: args.model.clone(),
        api_keys: args.api_keys.clone(),
        throttle_secs: args.throttle_secs,
    })
    .await?;
    print_stats("Structured extraction", &convert_stats);

    Ok(())
}

fn extract_text(args: &ExtractTextArgs) -> Result<ProcessingStats> {
    let config = ExtractionConfig {
        ocr_language: args.ocr_language.clone(),
        ..ExtractionConfig::default()
    };
    let extractor = default_extractor(DefaultOcr::new(), config)?;
    let pipeline = TextPipeline::new(extractor);

    Ok(pipeline.run(&args.input, &args.output)?)
}

async fn convert(args: &ConvertArgs) -> Result<ProcessingStats> {
    let credentials = load_credentials(&args.api_keys);
    if credentials.is_empty() {
        return Err(CliError::NoCredentials(CREDENTIAL_ENV_PREFIX.to_string()));
    }

    let model = GeminiModel::new(args.model.clone())?;
    let config = RecordPipelineConfig {
        throttle_secs: args.throttle_secs,
        ..RecordPipelineConfig::default()
    };
    let mut pipeline = RecordPipeline::new(model, credentials, config)?;

    Ok(pipeline.run(&args.input, &args.output).await?)
}

fn print_stats(stage: &str, stats: &ProcessingStats) {
    println!("{stage}: {}", stats.summary());
    for error in &stats.errors {
        println!("  - {error}");
    }
}
