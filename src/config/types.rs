//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::icons::{IconOutputs, DEFAULT_ICO_PATHS, DEFAULT_PNG_PATH};
use crate::application::templates::{
    default_workspace_root, TemplateBuildOptions, DEFAULT_OUTPUT_DIR,
};
use crate::domain::entities::IconSpec;
use crate::domain::value_objects::{FailurePolicy, HexColor};

/// Bold sans-serif faces tried in order for the icon label
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\arialbd.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub icons: IconsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Template build options with relative paths resolved against `project_root`
    pub fn template_options(&self, project_root: &Path) -> TemplateBuildOptions {
        let workspace = self
            .templates
            .workspace_root
            .as_ref()
            .map(|p| project_root.join(p))
            .unwrap_or_else(default_workspace_root);
        TemplateBuildOptions::new(project_root.join(&self.templates.output_dir), workspace)
            .with_failure_policy(self.templates.on_failure)
            .with_parallel(self.templates.parallel)
    }

    /// Icon destinations resolved against `project_root`
    pub fn icon_outputs(&self, project_root: &Path) -> IconOutputs {
        IconOutputs {
            png: self.icons.png.clone(),
            ico: self.icons.ico.clone(),
        }
        .rooted_at(project_root)
    }
}

/// `[templates]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Archive directory, relative paths resolve against the project root
    pub output_dir: PathBuf,

    /// Scratch root; `None` means `<system temp>/localx_tpl`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    pub on_failure: FailurePolicy,

    pub parallel: bool,

    /// Subset of the catalog to build (empty = all)
    pub only: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workspace_root: None,
            on_failure: FailurePolicy::default(),
            parallel: false,
            only: Vec::new(),
        }
    }
}

/// `[icons]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    pub label: String,
    pub sizes: Vec<u32>,
    pub background: HexColor,
    pub foreground: HexColor,
    /// Font files tried in order
    pub fonts: Vec<PathBuf>,
    pub png: PathBuf,
    pub ico: Vec<PathBuf>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        let spec = IconSpec::default();
        Self {
            label: spec.label,
            sizes: spec.sizes,
            background: spec.background,
            foreground: spec.foreground,
            fonts: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            png: PathBuf::from(DEFAULT_PNG_PATH),
            ico: DEFAULT_ICO_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl IconsConfig {
    /// Render parameters described by this section
    pub fn spec(&self) -> IconSpec {
        IconSpec {
            sizes: self.sizes.clone(),
            label: self.label.clone(),
            background: self.background,
            foreground: self.foreground,
            ..IconSpec::default()
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}
