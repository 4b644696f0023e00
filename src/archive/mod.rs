mod asset;
mod client;


pub use asset::{PageArchive, PageArchiveKind};
pub use client::{ArchiveClient, ArchiveError, ARCHIVE_BASE_URL};
