//! Template build result types

use crate::domain::entities::{BuildPhase, PackedArchive};
use crate::error::AssetError;

/// What happened to one template
#[derive(Debug)]
pub enum TemplateOutcome {
    /// Archive written
    Built(PackedArchive),
    /// Build stopped during `phase`
    Failed { phase: BuildPhase, error: AssetError },
    /// Never started because an earlier failure aborted the run
    Skipped,
}

impl TemplateOutcome {
    pub fn is_built(&self) -> bool {
        matches!(self, TemplateOutcome::Built(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TemplateOutcome::Failed { .. })
    }
}

/// Outcome for a named template
#[derive(Debug)]
pub struct TemplateReport {
    pub name: &'static str,
    pub outcome: TemplateOutcome,
}

/// Result of a templates run, in catalog order
#[derive(Debug, Default)]
pub struct TemplateBuildReport {
    pub templates: Vec<TemplateReport>,
}

impl TemplateBuildReport {
    pub fn new(templates: Vec<TemplateReport>) -> Self {
        Self { templates }
    }

    /// True when no template failed
    pub fn is_success(&self) -> bool {
        !self.templates.iter().any(|t| t.outcome.is_failed())
    }

    /// Archives that were written
    pub fn built(&self) -> impl Iterator<Item = (&'static str, &PackedArchive)> + '_ {
        self.templates.iter().filter_map(|t| match &t.outcome {
            TemplateOutcome::Built(archive) => Some((t.name, archive)),
            _ => None,
        })
    }

    /// Failed templates with the phase and cause
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, BuildPhase, &AssetError)> + '_ {
        self.templates.iter().filter_map(|t| match &t.outcome {
            TemplateOutcome::Failed { phase, error } => Some((t.name, *phase, error)),
            _ => None,
        })
    }

    /// Names of templates that never started
    pub fn skipped(&self) -> Vec<&'static str> {
        self.templates
            .iter()
            .filter(|t| matches!(t.outcome, TemplateOutcome::Skipped))
            .map(|t| t.name)
            .collect()
    }

    pub fn succeeded_count(&self) -> usize {
        self.built().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().len()
    }

    /// Consume the report, yielding one `TemplateFailed` error per failure
    pub fn into_errors(self) -> Vec<AssetError> {
        self.templates
            .into_iter()
            .filter_map(|t| match t.outcome {
                TemplateOutcome::Failed { phase, error } => Some(AssetError::TemplateFailed {
                    template: t.name.to_string(),
                    phase,
                    source: Box::new(error),
                }),
                _ => None,
            })
            .collect()
    }
}
