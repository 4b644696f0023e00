use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::BatchReport;
use crate::archive::{ArchiveClient, ArchiveError};
use crate::llm::{ChatClient, LlmError};
use crate::summarizer::prompts;

/// Describe the front page of every identifier listed in `identifiers_path`
/// (one per line, blank lines ignored), writing `<identifier>_summary.txt`
/// into `output_dir`.
///
/// Lookup, download, and description failures skip the identifier and the
/// batch continues. A missing identifiers file is fatal.
pub async fn run_frontpages(
    chat: &ChatClient,
    archive: &ArchiveClient,
    identifiers_path: &Path,
    output_dir: &Path,
) -> io::Result<BatchReport> {
    let listing = fs::read_to_string(identifiers_path)?;
    let identifiers: Vec<&str> = listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    fs::create_dir_all(output_dir)?;
    info!(count = identifiers.len(), "processing identifiers");

    let mut report = BatchReport::default();
    for (idx, identifier) in identifiers.iter().enumerate() {
        info!(
            identifier,
            position = idx + 1,
            total = identifiers.len(),
            "processing front page"
        );
        match describe_frontpage(chat, archive, identifier, output_dir).await {
            Ok(out_path) => {
                info!(identifier, output = %out_path.display(), "summary written");
                report.written += 1;
            }
            Err(e) => {
                warn!(identifier, error = %e, "identifier failed");
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

#[derive(Debug, thiserror::Error)]
enum FrontpageError {
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

async fn describe_frontpage(
    chat: &ChatClient,
    archive: &ArchiveClient,
    identifier: &str,
    output_dir: &Path,
) -> Result<PathBuf, FrontpageError> {
    let page_archive = archive.frontpage_archive(identifier).await?;
    let jpeg = archive.download_preview(identifier, &page_archive).await?;

    let summary = chat
        .describe_image(prompts::FRONTPAGE_SYSTEM, prompts::FRONTPAGE_USER, &jpeg)
        .await?;

    let out_path = output_dir.join(format!("{identifier}_summary.txt"));
    fs::write(&out_path, &summary)?;
    Ok(out_path)
}
