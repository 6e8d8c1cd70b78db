//! Kagaz CLI - digitize identity documents into structured records.

use clap::Parser;
use kagaz_cli::{commands, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> kagaz_cli::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ExtractText(args) => commands::execute_extract_text(args)?,
        Command::Convert(args) => commands::execute_convert(args).await?,
        Command::Run(args) => commands::execute_run(args).await?,
    }

    Ok(())
}
