//! Template build options

use std::path::PathBuf;

use crate::domain::entities::TemplateDefinition;
use crate::domain::value_objects::FailurePolicy;

/// Archive directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "assets/templates";

/// Scratch root: `<system temp>/localx_tpl`
pub fn default_workspace_root() -> PathBuf {
    std::env::temp_dir().join("localx_tpl")
}

/// Options for the templates command
#[derive(Debug, Clone)]
pub struct TemplateBuildOptions {
    /// Directory receiving `<name>.zip`
    pub output_dir: PathBuf,
    /// Parent of the per-template scratch directories
    pub workspace_root: PathBuf,
    pub failure_policy: FailurePolicy,
    /// Build templates concurrently
    pub parallel: bool,
}

impl Default for TemplateBuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workspace_root: default_workspace_root(),
            failure_policy: FailurePolicy::default(),
            parallel: false,
        }
    }
}

impl TemplateBuildOptions {
    pub fn new(output_dir: impl Into<PathBuf>, workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            workspace_root: workspace_root.into(),
            ..Self::default()
        }
    }

    /// Set failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Set parallel mode
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scratch directory owned by one template
    pub fn workspace_for(&self, template: &TemplateDefinition) -> PathBuf {
        self.workspace_root.join(template.name)
    }

    /// Final archive location for one template
    pub fn archive_for(&self, template: &TemplateDefinition) -> PathBuf {
        self.output_dir.join(template.archive_file_name())
    }
}
