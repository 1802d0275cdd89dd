//! Error types for localx-assets
//!
//! Library code returns `AssetError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::BuildPhase;

/// Result type alias for asset generation
pub type AssetResult<T> = Result<T, AssetError>;

/// Main error type for asset generation
#[derive(Error, Debug)]
pub enum AssetError {
    /// A static template definition is broken (programming error in the catalog)
    #[error("invalid template definition '{template}': {reason}")]
    InvalidDefinition { template: String, reason: String },

    /// Relative path would resolve outside its root
    #[error("path '{path}' escapes root '{root}'")]
    PathEscape { path: String, root: PathBuf },

    /// Template name not present in the catalog
    #[error("unknown template '{name}' (available: {available})")]
    UnknownTemplate { name: String, available: String },

    /// Filesystem failure with the attempted action and path
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive source directory is missing or not a directory
    #[error("archive source '{path}' does not exist or is not a directory")]
    SourceMissing { path: PathBuf },

    /// Archive source directory contains no files
    #[error("archive source '{path}' contains no files")]
    EmptySource { path: PathBuf },

    /// Zip encoder failure
    #[error("failed to write archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// One template of the catalog failed at a given phase
    #[error("template '{template}' failed during {phase}: {source}")]
    TemplateFailed {
        template: String,
        phase: BuildPhase,
        #[source]
        source: Box<AssetError>,
    },

    /// Raster encoding failure
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// Font file could not be parsed
    #[error("font '{path}' could not be loaded: {message}")]
    Font { path: PathBuf, message: String },

    /// Icon parameters out of range
    #[error("invalid icon spec: {0}")]
    InvalidIconSpec(String),

    /// Colour literal not in `#RRGGBB` / `#RRGGBBAA` form
    #[error("invalid colour '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

impl AssetError {
    /// Attach action and path context to an I/O error
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Template name this error is attributed to, if any
    pub fn template(&self) -> Option<&str> {
        match self {
            AssetError::InvalidDefinition { template, .. }
            | AssetError::TemplateFailed { template, .. } => Some(template),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_names_action_and_path() {
        let err = AssetError::io(
            "remove",
            "/tmp/localx_tpl/node",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked"),
        );
        assert_eq!(err.to_string(), "failed to remove /tmp/localx_tpl/node: locked");
    }

    #[test]
    fn template_failure_names_template_and_phase() {
        let err = AssetError::TemplateFailed {
            template: "react".to_string(),
            phase: BuildPhase::Archived,
            source: Box::new(AssetError::EmptySource {
                path: PathBuf::from("/tmp/localx_tpl/react"),
            }),
        };
        assert_eq!(
            err.to_string(),
            "template 'react' failed during archive: archive source '/tmp/localx_tpl/react' contains no files"
        );
        assert_eq!(err.template(), Some("react"));
    }

    #[test]
    fn definition_error_display() {
        let err = AssetError::InvalidDefinition {
            template: "evil".to_string(),
            reason: "path '../x' contains '..'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid template definition 'evil': path '../x' contains '..'"
        );
    }
}
