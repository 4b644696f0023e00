use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use super::BatchReport;
use crate::summarizer::{SummarizeError, SummaryBackend, SummaryDriver};
use crate::tokenizer::Tokenizer;

/// Prefix for transcript summary files: `gpt_<original_filename>`.
const OUTPUT_PREFIX: &str = "gpt_";

/// Summarize every `.txt` transcript in `source_dir`, writing one summary
/// file per transcript into `output_dir`.
///
/// Documents are processed one at a time, in filename order. A failing
/// document is logged and skipped without writing anything; the batch
/// continues. Only an unreadable source directory or an uncreatable output
/// directory is fatal.
pub async fn run_transcripts<B: SummaryBackend, T: Tokenizer>(
    driver: &SummaryDriver<B, T>,
    source_dir: &Path,
    output_dir: &Path,
) -> io::Result<BatchReport> {
    let mut transcripts: Vec<PathBuf> = WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    transcripts.sort();

    if transcripts.is_empty() && !source_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source directory not found: {}", source_dir.display()),
        ));
    }

    fs::create_dir_all(output_dir)?;
    info!(count = transcripts.len(), "processing transcripts");

    let mut report = BatchReport::default();
    for path in &transcripts {
        match summarize_transcript(driver, path, output_dir).await {
            Ok(out_path) => {
                info!(transcript = %path.display(), output = %out_path.display(), "summary written");
                report.written += 1;
            }
            Err(TranscriptError::Summarize(SummarizeError::EmptyDocument)) => {
                info!(transcript = %path.display(), "empty transcript, nothing to summarize");
                report.skipped += 1;
            }
            Err(e) => {
                warn!(transcript = %path.display(), error = %e, "transcript failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[derive(Debug, thiserror::Error)]
enum TranscriptError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

async fn summarize_transcript<B: SummaryBackend, T: Tokenizer>(
    driver: &SummaryDriver<B, T>,
    path: &Path,
    output_dir: &Path,
) -> Result<PathBuf, TranscriptError> {
    let raw = fs::read_to_string(path)?;
    // Line breaks are collapsed before tokenization, as the archival
    // transcripts wrap mid-sentence.
    let text = raw.replace('\n', " ");

    let summary = driver.summarize_document(&text).await?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out_path = output_dir.join(format!("{OUTPUT_PREFIX}{file_name}"));
    fs::write(&out_path, &summary)?;
    Ok(out_path)
}
