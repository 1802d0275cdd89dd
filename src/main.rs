//! localx-assets CLI - build-time asset generator for LocalX
//!
//! Usage: localx-assets [COMMAND]
//!
//! Commands:
//!   templates  Build the starter-template zip archives
//!   icons      Render the application icon set
//!   check      Validate the catalog without writing
//!   list       List catalog templates

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, ColorWhen, Commands};
use commands::RunContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprint!("{}", ui::error::format_error(&e, error_color(&cli)));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let ctx = RunContext::from_cli(cli)?;

    match &cli.command {
        None => commands::build_all(&ctx),
        Some(Commands::Templates(args)) => commands::templates::run(&ctx, args),
        Some(Commands::Icons(args)) => commands::icons::run(&ctx, args),
        Some(Commands::Check) => commands::check::run(&ctx),
        Some(Commands::List) => commands::list::run(&ctx),
    }
}

/// Fatal errors can happen before config is loaded, so only the flag and the
/// terminal decide
fn error_color(cli: &Cli) -> bool {
    match cli.color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => {
            let caps = ui::terminal::detect_capabilities();
            caps.supports_color && !caps.is_ci
        }
    }
}
