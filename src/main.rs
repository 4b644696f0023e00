use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gistmill::config::{self, SummaryConfig};
use gistmill::pipeline::{run_frontpages, run_transcripts};
use gistmill::{ArchiveClient, ChatClient, SummaryDriver, TiktokenTokenizer};

#[derive(Parser)]
#[command(name = "gistmill", version, about = "Batch LLM summaries for archival material")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize every .txt transcript in a directory
    Transcripts {
        /// Directory of transcript files
        #[arg(long, default_value = "source")]
        source: PathBuf,
        /// Directory for gpt_<name> summary files
        #[arg(long, default_value = "output")]
        output: PathBuf,
        /// Generation model (also selects the tokenizer)
        #[arg(long, default_value = "gpt-3.5-turbo")]
        model: String,
    },
    /// Describe newspaper front pages for a list of archive identifiers
    Frontpages {
        /// File with one archive identifier per line
        identifiers: PathBuf,
        /// Directory for <identifier>_summary.txt files
        #[arg(long, default_value = ".")]
        output: PathBuf,
        /// Vision-capable generation model
        #[arg(long, default_value = "gpt-4o")]
        model: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_key = config::api_key_from_env()?;

    let report = match cli.command {
        Command::Transcripts {
            source,
            output,
            model,
        } => {
            let tokenizer = TiktokenTokenizer::for_model(&model)?;
            let chat = ChatClient::new(api_key, model.as_str());
            let driver =
                SummaryDriver::new(chat, tokenizer, SummaryConfig::archivist(model.as_str()))?;

            run_transcripts(&driver, &source, &output)
                .await
                .with_context(|| format!("failed to process {}", source.display()))?
        }
        Command::Frontpages {
            identifiers,
            output,
            model,
        } => {
            let chat = ChatClient::new(api_key, model.as_str());
            let archive = ArchiveClient::new();

            run_frontpages(&chat, &archive, &identifiers, &output)
                .await
                .with_context(|| format!("failed to process {}", identifiers.display()))?
        }
    };

    info!(
        total = report.total(),
        written = report.written,
        skipped = report.skipped,
        failed = report.failed,
        "batch complete"
    );
    Ok(())
}
