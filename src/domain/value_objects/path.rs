//! Entry Path Value Object
//!
//! A validated archive entry / template file path:
//! - Relative, forward-slash separated
//! - No traversal (`..`) and no `.` segments
//! - No empty segments, no backslashes, no drive or root prefixes

use std::fmt;
use std::path::{Path, PathBuf};

/// Error when path validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Path is empty
    Empty,
    /// Path starts at a root or carries a drive prefix
    AbsoluteNotAllowed,
    /// Path contains a `..` segment
    ContainsTraversal,
    /// Path contains a `.` segment
    CurrentDirSegment,
    /// Path contains `//` or a trailing `/`
    EmptySegment,
    /// Path uses `\` instead of `/`
    Backslash,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "path is empty"),
            PathError::AbsoluteNotAllowed => write!(f, "absolute paths are not allowed"),
            PathError::ContainsTraversal => write!(f, "path contains traversal segment '..'"),
            PathError::CurrentDirSegment => write!(f, "path contains '.' segment"),
            PathError::EmptySegment => write!(f, "path contains an empty segment"),
            PathError::Backslash => write!(f, "path must use '/' separators"),
        }
    }
}

impl std::error::Error for PathError {}

/// A validated relative path inside a template tree
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPath(String);

impl EntryPath {
    /// Validate a forward-slash relative path
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        if raw.contains('\\') {
            return Err(PathError::Backslash);
        }
        if raw.starts_with('/') || has_drive_prefix(raw) {
            return Err(PathError::AbsoluteNotAllowed);
        }

        for segment in raw.split('/') {
            match segment {
                "" => return Err(PathError::EmptySegment),
                "." => return Err(PathError::CurrentDirSegment),
                ".." => return Err(PathError::ContainsTraversal),
                _ => {}
            }
        }

        Ok(Self(raw.to_string()))
    }

    /// Build an entry path from a path relative to some root (host separators)
    pub fn from_relative(path: &Path) -> Result<Self, PathError> {
        use std::path::Component;

        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_string_lossy().into_owned()),
                Component::ParentDir => return Err(PathError::ContainsTraversal),
                Component::CurDir => return Err(PathError::CurrentDirSegment),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PathError::AbsoluteNotAllowed)
                }
            }
        }

        Self::parse(&segments.join("/"))
    }

    /// The forward-slash form, as stored in archives
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segments of the path
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Join onto `root` one segment at a time, using host separators
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut full = root.to_path_buf();
        for segment in self.segments() {
            full.push(segment);
        }
        full
    }

    /// Parent portion, if the path is nested
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(parent, _)| parent)
    }
}

fn has_drive_prefix(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
