//! Command handlers
//!
//! Each handler returns `Ok(true)` on success, `Ok(false)` when the run
//! completed but something failed (already reported), and `Err` for fatal
//! problems before any work started.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use localx_assets::config::{load_layered, LoadedConfig};
use localx_assets::domain::ports::BuildEventSink;
use localx_assets::infrastructure::{ConsoleEventSink, JsonEventSink};

use crate::cli::{Cli, IconsArgs, TemplatesArgs};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

pub mod check;
pub mod icons;
pub mod list;
pub mod templates;

/// Everything a command needs from the invocation
pub struct RunContext {
    pub project_root: PathBuf,
    pub loaded: LoadedConfig,
    pub ui: UiContext,
}

impl RunContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        Self::load(project_root, cli)
    }

    fn load(project_root: PathBuf, cli: &Cli) -> Result<Self> {
        let loaded = load_layered(&project_root, cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);

        if !loaded.warnings.is_empty() {
            print_config_warnings(&loaded.warnings, ui.unicode);
        }

        Ok(Self {
            project_root,
            loaded,
            ui,
        })
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Event sink matching the output mode
    pub fn event_sink(&self) -> Arc<dyn BuildEventSink> {
        if self.ui.json {
            Arc::new(JsonEventSink::stdout())
        } else {
            Arc::new(ConsoleEventSink::stdio(
                self.ui.verbose,
                self.ui.console_style(),
            ))
        }
    }
}

/// No subcommand: templates, then icons. Icons are not attempted when a
/// template failed.
pub fn build_all(ctx: &RunContext) -> Result<bool> {
    if !templates::run(ctx, &TemplatesArgs::default())? {
        return Ok(false);
    }
    icons::run(ctx, &IconsArgs::default())
}
