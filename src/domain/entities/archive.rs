//! PackedArchive entity - a finished `<name>.zip` on disk

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Archive produced by an `ArchivePacker`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedArchive {
    path: PathBuf,
    entries: Vec<String>,
    size_bytes: u64,
    digest: ContentHash,
}

impl PackedArchive {
    pub fn new(path: PathBuf, entries: Vec<String>, size_bytes: u64, digest: ContentHash) -> Self {
        Self {
            path,
            entries,
            size_bytes,
            digest,
        }
    }

    /// Location of the archive file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry names in archive order (forward-slash relative paths)
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Size of the archive file in bytes
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// SHA-256 of the archive file
    pub fn digest(&self) -> &ContentHash {
        &self.digest
    }
}
