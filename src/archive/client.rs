use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::asset::PageArchive;

pub const ARCHIVE_BASE_URL: &str = "https://archive.org";

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("metadata lookup failed for '{identifier}': {reason}")]
    Lookup { identifier: String, reason: String },

    #[error("no page-image archive found for '{identifier}'")]
    NoPageArchive { identifier: String },

    #[error("failed to download {url}: {reason}")]
    Fetch { url: String, reason: String },
}

/// Item metadata, reduced to the file list we select from.
#[derive(Debug, Deserialize)]
struct ItemMetadata {
    #[serde(default)]
    files: Vec<FileRecord>,
}

#[derive(Debug, Deserialize)]
struct FileRecord {
    #[serde(default)]
    name: String,
}

/// Internet Archive collaborator: metadata lookup and preview download.
/// Plain sequential I/O, no retries; failures skip the item.
pub struct ArchiveClient {
    http: Client,
    base_url: String,
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveClient {
    pub fn new() -> Self {
        Self::with_base_url(ARCHIVE_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Resolve the page-image ZIP for an item from its metadata.
    pub async fn frontpage_archive(&self, identifier: &str) -> Result<PageArchive, ArchiveError> {
        let url = format!("{}/metadata/{}", self.base_url, identifier);
        debug!(%url, "fetching item metadata");

        let response = self.http.get(&url).send().await.map_err(|e| {
            ArchiveError::Lookup {
                identifier: identifier.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::Lookup {
                identifier: identifier.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        let meta: ItemMetadata =
            response.json().await.map_err(|e| ArchiveError::Lookup {
                identifier: identifier.to_string(),
                reason: e.to_string(),
            })?;

        let names: Vec<String> = meta.files.into_iter().map(|f| f.name).collect();
        PageArchive::select(&names).ok_or_else(|| ArchiveError::NoPageArchive {
            identifier: identifier.to_string(),
        })
    }

    /// Download the front-page JPG preview for a resolved archive.
    pub async fn download_preview(
        &self,
        identifier: &str,
        archive: &PageArchive,
    ) -> Result<Vec<u8>, ArchiveError> {
        let url = archive.preview_url(&self.base_url, identifier);
        debug!(%url, "downloading front page preview");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ArchiveError::Fetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArchiveError::Fetch {
                url,
                reason: format!("HTTP {status}"),
            });
        }

        let bytes = response.bytes().await.map_err(|e| ArchiveError::Fetch {
            url,
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}
