//! ArchivePacker port - turns a directory into one compressed archive

use std::path::Path;

use crate::domain::entities::PackedArchive;
use crate::error::AssetResult;

/// Packs a directory tree into an archive file
pub trait ArchivePacker: Send + Sync {
    /// Pack every file under `source_dir` into `archive_path`, replacing any
    /// existing archive. Entry names are paths relative to `source_dir`
    /// with `/` separators.
    fn pack(&self, source_dir: &Path, archive_path: &Path) -> AssetResult<PackedArchive>;
}
