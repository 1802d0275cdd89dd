//! Check Use Case
//!
//! Validates the template catalog and the icon parameters without touching
//! the disk.

use crate::domain::catalog::{Catalog, DefinitionIssue};
use crate::domain::entities::IconSpec;

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// Templates examined
    pub templates: usize,
    /// Files declared across all templates
    pub files: usize,
    /// Catalog problems, in catalog order
    pub issues: Vec<DefinitionIssue>,
    /// Icon parameter problem, if any
    pub icon_error: Option<String>,
}

impl CheckResult {
    /// Check if everything validated
    pub fn is_success(&self) -> bool {
        self.issues.is_empty() && self.icon_error.is_none()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len() + usize::from(self.icon_error.is_some())
    }
}

/// Check use case
#[derive(Debug, Default)]
pub struct CheckUseCase;

impl CheckUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, catalog: &Catalog, icon: &IconSpec) -> CheckResult {
        CheckResult {
            templates: catalog.len(),
            files: catalog.iter().map(|t| t.files.len()).sum(),
            issues: catalog.validate(),
            icon_error: icon.validate().err().map(|e| e.to_string()),
        }
    }
}
