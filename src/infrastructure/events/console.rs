//! Console Event Sink
//!
//! Human-readable progress. Quiet by default: a successful command prints a
//! single `<command> ok` line. `-v` adds one line per template or icon file,
//! `-vv` adds phase transitions. Failures always go to stderr.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// How status markers are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub color: bool,
    pub unicode: bool,
}

impl Default for ConsoleStyle {
    fn default() -> Self {
        Self {
            color: false,
            unicode: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Success,
    Skipped,
    Progress,
}

impl ConsoleStyle {
    fn marker(&self, marker: Marker) -> String {
        let (unicode, ascii, color) = match marker {
            Marker::Success => ("✓", "[OK]", Color::Green),
            Marker::Skipped => ("○", "[SKIP]", Color::Yellow),
            Marker::Progress => ("●", "[..]", Color::DarkGrey),
        };
        let text = if self.unicode { unicode } else { ascii };
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.with(Color::DarkGrey).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Event sink printing human-readable lines
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
    style: ConsoleStyle,
}

impl ConsoleEventSink {
    /// Console sink on the process stdout/stderr
    pub fn stdio(verbose: u8, style: ConsoleStyle) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose, style)
    }

    pub fn with_writers<O, E>(out: O, err: E, verbose: u8, style: ConsoleStyle) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            verbose,
            style,
        }
    }

    fn line(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
            let _ = out.flush();
        }
    }

    fn error_line(&self, text: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", text);
            let _ = err.flush();
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let style = &self.style;
        match event {
            BuildEvent::Started {
                command,
                total,
                output,
            } if self.verbose >= 1 => {
                let noun = if command == "templates" { "templates" } else { "icon sizes" };
                self.line(&format!(
                    "{} {}: {} {} -> {}",
                    style.marker(Marker::Progress),
                    command,
                    total,
                    noun,
                    output.display()
                ));
            }

            BuildEvent::TemplateStarted { name, .. } if self.verbose >= 2 => {
                self.line(&style.dim(&format!("  {}: start", name)));
            }

            BuildEvent::PhaseCompleted { name, phase, .. } if self.verbose >= 2 => {
                self.line(&style.dim(&format!("  {}: {}", name, phase)));
            }

            BuildEvent::TemplateArchived {
                name,
                path,
                entries,
                size_bytes,
                ..
            } if self.verbose >= 1 => {
                self.line(&format!(
                    "{} {} -> {} ({} files, {} bytes)",
                    style.marker(Marker::Success),
                    name,
                    path.display(),
                    entries,
                    size_bytes
                ));
            }

            BuildEvent::TemplateFailed {
                name, phase, error, ..
            } => {
                self.error_line(&format!(
                    "{}: template '{}' failed during {}: {}",
                    style.label("error", Color::Red),
                    name,
                    phase,
                    error
                ));
            }

            BuildEvent::TemplateSkipped { name, .. } if self.verbose >= 1 => {
                self.line(&format!("{} {} skipped", style.marker(Marker::Skipped), name));
            }

            BuildEvent::IconRendered { size } if self.verbose >= 2 => {
                self.line(&style.dim(&format!("  rendered {}x{}", size, size)));
            }

            BuildEvent::IconWritten {
                path,
                format,
                sizes,
            } if self.verbose >= 1 => {
                let sizes = sizes
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(&format!(
                    "{} {} {} [{}]",
                    style.marker(Marker::Success),
                    format,
                    path.display(),
                    sizes
                ));
            }

            BuildEvent::Completed {
                command,
                succeeded,
                failed,
                skipped,
            } => {
                if failed == 0 {
                    self.line(&format!("{} ok", command));
                } else if self.verbose >= 1 {
                    self.line(&format!(
                        "{}: {} built, {} failed, {} skipped",
                        command, succeeded, failed, skipped
                    ));
                }
            }

            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BuildPhase;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn sink(verbose: u8) -> (ConsoleEventSink, SharedBuf, SharedBuf) {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let sink = ConsoleEventSink::with_writers(
            out.clone(),
            err.clone(),
            verbose,
            ConsoleStyle {
                color: false,
                unicode: false,
            },
        );
        (sink, out, err)
    }

    fn archived(name: &str) -> BuildEvent {
        BuildEvent::TemplateArchived {
            index: 0,
            name: name.into(),
            path: PathBuf::from(format!("assets/templates/{}.zip", name)),
            entries: 2,
            size_bytes: 10,
            digest: "sha256:00".into(),
        }
    }

    fn completed(failed: usize) -> BuildEvent {
        BuildEvent::Completed {
            command: "templates",
            succeeded: 1,
            failed,
            skipped: 0,
        }
    }

    #[test]
    fn quiet_mode_prints_only_confirmation() {
        let (sink, out, err) = sink(0);
        sink.on_event(archived("node"));
        sink.on_event(completed(0));

        assert_eq!(out.text(), "templates ok\n");
        assert!(err.text().is_empty());
    }

    #[test]
    fn verbose_mode_prints_each_template() {
        let (sink, out, _) = sink(1);
        sink.on_event(archived("node"));
        sink.on_event(BuildEvent::PhaseCompleted {
            index: 0,
            name: "node".into(),
            phase: BuildPhase::Archived,
        });

        let text = out.text();
        assert!(text.contains("[OK] node -> assets/templates/node.zip (2 files, 10 bytes)"));
        assert!(!text.contains("archive"), "phases need -vv: {}", text);
    }

    #[test]
    fn phases_shown_at_double_verbose() {
        let (sink, out, _) = sink(2);
        assert!(sink.wants_detailed_events());
        sink.on_event(BuildEvent::PhaseCompleted {
            index: 0,
            name: "node".into(),
            phase: BuildPhase::FilesMaterialized,
        });

        assert!(out.text().contains("node: materialize"));
    }

    #[test]
    fn failures_always_reach_stderr() {
        let (sink, out, err) = sink(0);
        sink.on_event(BuildEvent::TemplateFailed {
            index: 0,
            name: "php".into(),
            phase: BuildPhase::Archived,
            error: "disk full".into(),
        });
        sink.on_event(completed(1));

        assert_eq!(
            err.text(),
            "error: template 'php' failed during archive: disk full\n"
        );
        assert!(!out.text().contains("ok"));
    }
}
