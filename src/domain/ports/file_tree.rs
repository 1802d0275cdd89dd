//! FileTreeWriter port - stages a template's files in a scratch directory

use std::path::Path;

use crate::domain::entities::TemplateFile;
use crate::error::AssetResult;

/// Writes template trees to disk
///
/// Implementations:
/// - `LocalFs` - standard file I/O
pub trait FileTreeWriter: Send + Sync {
    /// Remove `dir` if present, then create it empty.
    ///
    /// A missing directory is not an error; failing to remove an existing
    /// one is.
    fn reset_dir(&self, dir: &Path) -> AssetResult<()>;

    /// Create `dir` and its parents if missing; existing contents are kept
    fn ensure_dir(&self, dir: &Path) -> AssetResult<()>;

    /// Write every file under `root`, in order, creating parent directories
    /// and overwriting existing files. Paths that would leave `root` are
    /// rejected before anything is written for them.
    fn materialize(&self, root: &Path, files: &[TemplateFile]) -> AssetResult<()>;
}
