use anyhow::Result;
use localx_assets::config::Config;
use localx_assets::{
    Catalog, FailurePolicy, LocalFs, TemplateBuildOptions, TemplateBuildUseCase, ZipPacker,
};

use super::RunContext;
use crate::cli::TemplatesArgs;

pub fn run(ctx: &RunContext, args: &TemplatesArgs) -> Result<bool> {
    let config = &ctx.loaded.config;
    let catalog = select_catalog(config, args)?;
    let options = build_options(ctx, config, args);

    let use_case = TemplateBuildUseCase::new(LocalFs::new(), ZipPacker::new());
    let report = use_case.execute(&catalog, &options, ctx.event_sink())?;

    Ok(report.is_success())
}

/// `--only` replaces `[templates] only`; both empty means the whole catalog
fn select_catalog(config: &Config, args: &TemplatesArgs) -> Result<Catalog> {
    let only = if args.only.is_empty() {
        &config.templates.only
    } else {
        &args.only
    };
    Ok(Catalog::builtin().select(only)?)
}

fn build_options(ctx: &RunContext, config: &Config, args: &TemplatesArgs) -> TemplateBuildOptions {
    let root = ctx.project_root();
    let mut options = config.template_options(root);

    if let Some(dir) = &args.output_dir {
        options.output_dir = root.join(dir);
    }
    if let Some(dir) = &args.workspace {
        options.workspace_root = root.join(dir);
    }
    if args.keep_going {
        options.failure_policy = FailurePolicy::Continue;
    }
    if args.parallel {
        options.parallel = true;
    }

    options
}
