//! Icon output locations

use std::path::PathBuf;

/// Flat PNG of the largest size
pub const DEFAULT_PNG_PATH: &str = "assets/icons/localx.png";

/// Multi-resolution ICO destinations
pub const DEFAULT_ICO_PATHS: &[&str] = &[
    "assets/icons/localx.ico",
    "windows/runner/resources/app_icon.ico",
];

/// Where the icon files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutputs {
    pub png: PathBuf,
    /// Every path receives the same ICO bytes
    pub ico: Vec<PathBuf>,
}

impl Default for IconOutputs {
    fn default() -> Self {
        Self {
            png: PathBuf::from(DEFAULT_PNG_PATH),
            ico: DEFAULT_ICO_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl IconOutputs {
    /// Resolve relative outputs against `root`
    pub fn rooted_at(self, root: &std::path::Path) -> Self {
        Self {
            png: root.join(self.png),
            ico: self.ico.into_iter().map(|p| root.join(p)).collect(),
        }
    }
}
