//! Template Build Use Case
//!
//! Orchestrates the per-template build loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::catalog::Catalog;
use crate::domain::entities::{BuildPhase, PackedArchive, TemplateDefinition};
use crate::domain::ports::{ArchivePacker, BuildEvent, BuildEventSink, FileTreeWriter};
use crate::error::{AssetError, AssetResult};

use super::options::TemplateBuildOptions;
use super::result::{TemplateBuildReport, TemplateOutcome, TemplateReport};

/// Template build use case - catalog in, one archive per template out
pub struct TemplateBuildUseCase<W, P>
where
    W: FileTreeWriter,
    P: ArchivePacker,
{
    writer: W,
    packer: P,
}

impl<W, P> TemplateBuildUseCase<W, P>
where
    W: FileTreeWriter,
    P: ArchivePacker,
{
    /// Create a new template build use case
    pub fn new(writer: W, packer: P) -> Self {
        Self { writer, packer }
    }

    /// Build every template of `catalog`.
    ///
    /// Definition errors are returned before anything touches the disk.
    /// Per-template failures land in the report; `Err` is reserved for
    /// problems that prevent the run from starting.
    pub fn execute(
        &self,
        catalog: &Catalog,
        options: &TemplateBuildOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> AssetResult<TemplateBuildReport> {
        catalog.ensure_valid()?;
        self.writer.ensure_dir(&options.output_dir)?;

        event_sink.on_event(BuildEvent::Started {
            command: "templates",
            total: catalog.len(),
            output: options.output_dir.clone(),
        });

        let templates: Vec<&TemplateDefinition> = catalog.iter().collect();
        let abort = AtomicBool::new(false);

        let run_one = |(index, template): (usize, &&TemplateDefinition)| {
            let outcome = if abort.load(Ordering::SeqCst) {
                event_sink.on_event(BuildEvent::TemplateSkipped {
                    index,
                    name: template.name.to_string(),
                });
                TemplateOutcome::Skipped
            } else {
                let outcome = self.build_one(index, template, options, event_sink.as_ref());
                if outcome.is_failed() && options.failure_policy.stops_on_failure() {
                    abort.store(true, Ordering::SeqCst);
                }
                outcome
            };
            TemplateReport {
                name: template.name,
                outcome,
            }
        };

        let reports: Vec<TemplateReport> = if options.parallel {
            templates.par_iter().enumerate().map(run_one).collect()
        } else {
            templates.iter().enumerate().map(run_one).collect()
        };
        let report = TemplateBuildReport::new(reports);

        event_sink.on_event(BuildEvent::Completed {
            command: "templates",
            succeeded: report.succeeded_count(),
            failed: report.failed_count(),
            skipped: report.skipped_count(),
        });

        Ok(report)
    }

    /// Run one template through `Idle → WorkspaceReset → FilesMaterialized
    /// → Archived → Done`
    fn build_one(
        &self,
        index: usize,
        template: &TemplateDefinition,
        options: &TemplateBuildOptions,
        event_sink: &dyn BuildEventSink,
    ) -> TemplateOutcome {
        let name = template.name.to_string();
        event_sink.on_event(BuildEvent::TemplateStarted {
            index,
            name: name.clone(),
        });

        match self.run_phases(index, template, options, event_sink) {
            Ok(archive) => {
                event_sink.on_event(BuildEvent::TemplateArchived {
                    index,
                    name,
                    path: archive.path().to_path_buf(),
                    entries: archive.entry_count(),
                    size_bytes: archive.size_bytes(),
                    digest: archive.digest().to_string(),
                });
                TemplateOutcome::Built(archive)
            }
            Err((phase, error)) => {
                event_sink.on_event(BuildEvent::TemplateFailed {
                    index,
                    name,
                    phase,
                    error: error.to_string(),
                });
                TemplateOutcome::Failed { phase, error }
            }
        }
    }

    fn run_phases(
        &self,
        index: usize,
        template: &TemplateDefinition,
        options: &TemplateBuildOptions,
        event_sink: &dyn BuildEventSink,
    ) -> Result<PackedArchive, (BuildPhase, AssetError)> {
        let workspace = options.workspace_for(template);
        let archive_path = options.archive_for(template);
        let detailed = event_sink.wants_detailed_events();

        let mut phase = BuildPhase::Idle;
        let mut archive = None;
        while let Some(next) = phase.next() {
            let step = match next {
                BuildPhase::WorkspaceReset => self.writer.reset_dir(&workspace),
                BuildPhase::FilesMaterialized => {
                    self.writer.materialize(&workspace, template.files)
                }
                BuildPhase::Archived => self
                    .packer
                    .pack(&workspace, &archive_path)
                    .map(|packed| archive = Some(packed)),
                BuildPhase::Idle | BuildPhase::Done => Ok(()),
            };
            step.map_err(|e| (next, e))?;
            phase = next;

            if detailed {
                event_sink.on_event(BuildEvent::PhaseCompleted {
                    index,
                    name: template.name.to_string(),
                    phase,
                });
            }
        }

        archive.ok_or((
            BuildPhase::Archived,
            AssetError::EmptySource { path: workspace },
        ))
    }
}
