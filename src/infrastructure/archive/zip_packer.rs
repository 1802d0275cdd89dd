//! Zip Archive Packer
//!
//! Deterministic zip output: entries sorted by name, Deflate compression,
//! fixed 1980-01-01 timestamps and 0644 permissions. Packing the same tree
//! twice yields byte-identical archives.

use std::fs::File;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::entities::PackedArchive;
use crate::domain::ports::ArchivePacker;
use crate::domain::value_objects::{ContentHash, EntryPath};
use crate::error::{AssetError, AssetResult};
use crate::infrastructure::fs::atomic;

/// Unix mode stored for every entry
const ENTRY_MODE: u32 = 0o644;

/// `ArchivePacker` backed by the `zip` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipPacker;

impl ZipPacker {
    pub fn new() -> Self {
        Self
    }

    fn entry_options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(ENTRY_MODE)
    }
}

/// Every regular file under `source_dir`, with its forward-slash entry name,
/// sorted by entry name
pub fn collect_entries(source_dir: &Path) -> AssetResult<Vec<(EntryPath, PathBuf)>> {
    if !source_dir.is_dir() {
        return Err(AssetError::SourceMissing {
            path: source_dir.to_path_buf(),
        });
    }

    let walker = WalkBuilder::new(source_dir)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = result.map_err(|e| {
            let io_err = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            AssetError::io("walk", source_dir, io_err)
        })?;

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let full = entry.into_path();
        let relative = full.strip_prefix(source_dir).map_err(|_| AssetError::PathEscape {
            path: full.display().to_string(),
            root: source_dir.to_path_buf(),
        })?;
        let name = EntryPath::from_relative(relative).map_err(|_| AssetError::PathEscape {
            path: relative.display().to_string(),
            root: source_dir.to_path_buf(),
        })?;
        entries.push((name, full));
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries)
}

impl ArchivePacker for ZipPacker {
    fn pack(&self, source_dir: &Path, archive_path: &Path) -> AssetResult<PackedArchive> {
        let entries = collect_entries(source_dir)?;
        if entries.is_empty() {
            return Err(AssetError::EmptySource {
                path: source_dir.to_path_buf(),
            });
        }

        let archive_err = |source: zip::result::ZipError| AssetError::Archive {
            path: archive_path.to_path_buf(),
            source,
        };

        // Dropping `tmp` on any early return removes the partial archive.
        let mut tmp = atomic::temp_file_beside(archive_path)?;
        {
            let mut writer = ZipWriter::new(tmp.as_file_mut());
            let options = Self::entry_options();

            for (name, full) in &entries {
                writer
                    .start_file(name.as_str(), options)
                    .map_err(archive_err)?;
                let mut input =
                    File::open(full).map_err(|e| AssetError::io("read", full.as_path(), e))?;
                std::io::copy(&mut input, &mut writer)
                    .map_err(|e| AssetError::io("compress", full.as_path(), e))?;
            }

            writer.finish().map_err(archive_err)?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|e| AssetError::io("flush", archive_path, e))?;
        atomic::persist(tmp, archive_path)?;

        let bytes =
            std::fs::read(archive_path).map_err(|e| AssetError::io("read", archive_path, e))?;

        Ok(PackedArchive::new(
            archive_path.to_path_buf(),
            entries.into_iter().map(|(name, _)| name.as_str().to_string()).collect(),
            bytes.len() as u64,
            ContentHash::from_bytes(&bytes),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::tempdir;

    fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
        let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut entry = archive.by_index(i).unwrap();
                let mut buf = Vec::new();
                entry.read_to_end(&mut buf).unwrap();
                (entry.name().to_string(), buf)
            })
            .collect()
    }

    fn sample_tree(root: &Path) {
        fs::create_dir_all(root.join("src").join("app")).unwrap();
        fs::write(root.join("package.json"), "{}\n").unwrap();
        fs::write(root.join("src").join("main.js"), "main\n").unwrap();
        fs::write(root.join("src").join("app").join("view.css"), "").unwrap();
        fs::write(root.join(".env.example"), "KEY=\n").unwrap();
    }

    #[test]
    fn pack_contains_every_file_with_relative_names() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("tree");
        sample_tree(&source);
        let archive = dir.path().join("out").join("tree.zip");

        let packed = ZipPacker::new().pack(&source, &archive).unwrap();

        assert_eq!(
            packed.entries(),
            &[".env.example", "package.json", "src/app/view.css", "src/main.js"]
        );
        let contents = read_archive(&archive);
        assert_eq!(contents.len(), 4);
        assert!(contents.contains(&("src/main.js".to_string(), b"main\n".to_vec())));
        assert!(contents.contains(&("src/app/view.css".to_string(), Vec::new())));
        assert_eq!(packed.size_bytes(), fs::metadata(&archive).unwrap().len());
    }

    #[test]
    fn entries_use_deflate() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("tree");
        sample_tree(&source);
        let archive = dir.path().join("tree.zip");
        ZipPacker::new().pack(&source, &archive).unwrap();

        let mut zip = zip::ZipArchive::new(File::open(&archive).unwrap()).unwrap();
        let entry = zip.by_name("package.json").unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn packing_twice_is_byte_identical() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("tree");
        sample_tree(&source);
        let first = dir.path().join("first.zip");
        let second = dir.path().join("second.zip");

        let a = ZipPacker::new().pack(&source, &first).unwrap();
        let b = ZipPacker::new().pack(&source, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn pack_overwrites_existing_archive() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("tree");
        sample_tree(&source);
        let archive = dir.path().join("tree.zip");
        fs::write(&archive, "not a zip").unwrap();

        ZipPacker::new().pack(&source, &archive).unwrap();

        assert_eq!(read_archive(&archive).len(), 4);
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        let err = ZipPacker::new()
            .pack(&dir.path().join("absent"), &dir.path().join("x.zip"))
            .unwrap_err();
        assert!(matches!(err, AssetError::SourceMissing { .. }));
        assert!(!dir.path().join("x.zip").exists());
    }

    #[test]
    fn empty_source_is_an_error_and_leaves_no_archive() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("empty");
        fs::create_dir_all(source.join("only-dirs")).unwrap();
        let archive = dir.path().join("empty.zip");

        let err = ZipPacker::new().pack(&source, &archive).unwrap_err();

        assert!(matches!(err, AssetError::EmptySource { .. }));
        assert!(!archive.exists());
    }
}
