//! Build Event Port
//!
//! Observable interface for the template and icon builds.
//! Drives console progress, the NDJSON event stream and tests.

use std::path::PathBuf;

use crate::domain::entities::BuildPhase;

/// Event emitted while building assets
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// A command started
    Started {
        command: &'static str,
        total: usize,
        output: PathBuf,
    },

    /// One template build started
    TemplateStarted { index: usize, name: String },

    /// One template moved into a new phase
    PhaseCompleted {
        index: usize,
        name: String,
        phase: BuildPhase,
    },

    /// Archive finalized on disk
    TemplateArchived {
        index: usize,
        name: String,
        path: PathBuf,
        entries: usize,
        size_bytes: u64,
        digest: String,
    },

    /// Template failed at `phase`
    TemplateFailed {
        index: usize,
        name: String,
        phase: BuildPhase,
        error: String,
    },

    /// Template never started because the run was aborted
    TemplateSkipped { index: usize, name: String },

    /// One icon size rendered in memory
    IconRendered { size: u32 },

    /// Icon file written (PNG or ICO)
    IconWritten {
        path: PathBuf,
        format: &'static str,
        sizes: Vec<u32>,
    },

    /// A command finished
    Completed {
        command: &'static str,
        succeeded: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - `ConsoleEventSink`: human-readable lines
/// - `JsonEventSink`: NDJSON stream for CI
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Whether per-phase and per-size events are wanted
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Test event sink that records all events
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingEventSink {
    pub events: std::sync::Mutex<Vec<BuildEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn take(&self) -> Vec<BuildEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

#[cfg(test)]
impl BuildEventSink for RecordingEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.lock().unwrap().push(event);
    }
}
