//! Atomic file writes
//!
//! Uses the tempfile + rename pattern: the destination either keeps its old
//! contents or receives the complete new contents, never a partial write.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{AssetError, AssetResult};

/// Create a temporary file next to `path` (same directory, same filesystem)
pub fn temp_file_beside(path: &Path) -> AssetResult<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| AssetError::io("create directory", parent, e))?;
    NamedTempFile::new_in(parent).map_err(|e| AssetError::io("create temporary file in", parent, e))
}

/// Move a fully written temporary file over `path`
pub fn persist(tmp: NamedTempFile, path: &Path) -> AssetResult<()> {
    tmp.persist(path)
        .map_err(|e| AssetError::io("replace", path, e.error))?;
    Ok(())
}

/// Write `content` to `path` atomically, creating parent directories
pub fn write_atomic(path: &Path, content: &[u8]) -> AssetResult<()> {
    let mut tmp = temp_file_beside(path)?;
    if let Err(e) = tmp.write_all(content).and_then(|_| tmp.flush()) {
        return Err(AssetError::io("write", path, e));
    }
    persist(tmp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_new_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("icon.png");

        write_atomic(&path, b"PNG").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"PNG");
    }

    #[test]
    fn write_atomic_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.txt");

        fs::write(&path, "Original").unwrap();
        write_atomic(&path, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Replaced");
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        write_atomic(&dir.path().join("a.bin"), b"1").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("a.bin")]);
    }
}
