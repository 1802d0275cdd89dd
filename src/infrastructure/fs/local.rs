//! Local File System Implementation
//!
//! Implements the FileTreeWriter port for local disk operations.

use std::path::Path;

use crate::domain::entities::TemplateFile;
use crate::domain::ports::FileTreeWriter;
use crate::domain::value_objects::EntryPath;
use crate::error::{AssetError, AssetResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileTreeWriter for LocalFs {
    fn reset_dir(&self, dir: &Path) -> AssetResult<()> {
        match std::fs::remove_dir_all(dir) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AssetError::io("remove", dir, e)),
        }
        self.ensure_dir(dir)
    }

    fn ensure_dir(&self, dir: &Path) -> AssetResult<()> {
        std::fs::create_dir_all(dir).map_err(|e| AssetError::io("create directory", dir, e))
    }

    fn materialize(&self, root: &Path, files: &[TemplateFile]) -> AssetResult<()> {
        // Validate the whole set first so a bad path writes nothing.
        let entries = files
            .iter()
            .map(|file| {
                EntryPath::parse(file.path)
                    .map(|entry| (entry, file))
                    .map_err(|_| AssetError::PathEscape {
                        path: file.path.to_string(),
                        root: root.to_path_buf(),
                    })
            })
            .collect::<AssetResult<Vec<_>>>()?;

        for (entry, file) in entries {
            let target = entry.resolve(root);

            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AssetError::io("create directory", parent, e))?;
            }
            std::fs::write(&target, file.contents_bytes())
                .map_err(|e| AssetError::io("write", &target, e))?;
        }
        Ok(())
    }
}
