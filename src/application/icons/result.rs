//! Icon build result types

use std::fmt;
use std::path::PathBuf;

/// Container format of a written icon file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Png,
    Ico,
}

impl IconFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Ico => "ico",
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file written by the icon build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub path: PathBuf,
    pub format: IconFormat,
    /// Edge lengths stored in the file
    pub sizes: Vec<u32>,
}

/// Result of an icon build
#[derive(Debug, Clone, Default)]
pub struct IconReport {
    /// Face the label was drawn with
    pub face: String,
    pub files: Vec<WrittenIcon>,
}

impl IconReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
