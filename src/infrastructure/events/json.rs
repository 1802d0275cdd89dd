//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON form of a build event
pub fn event_to_json(event: &BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::Started {
            command,
            total,
            output,
        } => serde_json::json!({
            "event": "start",
            "command": command,
            "total": total,
            "output": output.display().to_string(),
        }),

        BuildEvent::TemplateStarted { index, name } => serde_json::json!({
            "event": "template_start",
            "command": "templates",
            "index": index,
            "template": name,
        }),

        BuildEvent::PhaseCompleted { index, name, phase } => serde_json::json!({
            "event": "phase",
            "command": "templates",
            "index": index,
            "template": name,
            "phase": phase.as_str(),
        }),

        BuildEvent::TemplateArchived {
            index,
            name,
            path,
            entries,
            size_bytes,
            digest,
        } => serde_json::json!({
            "event": "archived",
            "command": "templates",
            "index": index,
            "template": name,
            "path": path.display().to_string(),
            "entries": entries,
            "bytes": size_bytes,
            "sha256": digest,
        }),

        BuildEvent::TemplateFailed {
            index,
            name,
            phase,
            error,
        } => serde_json::json!({
            "event": "template_error",
            "command": "templates",
            "index": index,
            "template": name,
            "phase": phase.as_str(),
            "error": error,
        }),

        BuildEvent::TemplateSkipped { index, name } => serde_json::json!({
            "event": "skipped",
            "command": "templates",
            "index": index,
            "template": name,
        }),

        BuildEvent::IconRendered { size } => serde_json::json!({
            "event": "icon_rendered",
            "command": "icons",
            "size": size,
        }),

        BuildEvent::IconWritten {
            path,
            format,
            sizes,
        } => serde_json::json!({
            "event": "icon_written",
            "command": "icons",
            "path": path.display().to_string(),
            "format": format,
            "sizes": sizes,
        }),

        BuildEvent::Completed {
            command,
            succeeded,
            failed,
            skipped,
        } => {
            let status = if *failed == 0 { "success" } else { "failure" };
            serde_json::json!({
                "event": "complete",
                "command": command,
                "status": status,
                "succeeded": succeeded,
                "failed": failed,
                "skipped": skipped,
            })
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
