use std::path::PathBuf;

use anyhow::Result;
use localx_assets::config::Config;
use localx_assets::IconBuildUseCase;

use super::RunContext;
use crate::cli::IconsArgs;

pub fn run(ctx: &RunContext, args: &IconsArgs) -> Result<bool> {
    let config = &ctx.loaded.config;
    let mut spec = config.icons.spec();
    if let Some(label) = &args.label {
        spec.label = label.clone();
    }

    let fonts = font_candidates(ctx, config, args);
    let outputs = config.icon_outputs(ctx.project_root());

    IconBuildUseCase::new().execute(&spec, &outputs, &fonts, ctx.event_sink())?;
    Ok(true)
}

/// `--font` paths first, then the configured list; relative paths resolve
/// against the project root
fn font_candidates(ctx: &RunContext, config: &Config, args: &IconsArgs) -> Vec<PathBuf> {
    args.font
        .iter()
        .chain(config.icons.fonts.iter())
        .map(|p| ctx.project_root().join(p))
        .collect()
}
