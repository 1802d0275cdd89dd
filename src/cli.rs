use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// localx-assets - build-time asset generator for LocalX
#[derive(Parser, Debug)]
#[command(name = "localx-assets")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'localx-assets' without a command to build templates and icons.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (replaces project and user config lookup)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the starter-template zip archives
    Templates(TemplatesArgs),

    /// Render the application icon set (PNG and ICO)
    Icons(IconsArgs),

    /// Validate the template catalog and icon parameters (no disk writes)
    Check,

    /// List catalog templates and their files
    List,
}

#[derive(Args, Debug, Default, Clone)]
pub struct TemplatesArgs {
    /// Directory receiving `<name>.zip` archives
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Scratch root for per-template workspaces
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Build only these templates (comma separated)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub only: Vec<String>,

    /// Keep building after a template fails
    #[arg(long)]
    pub keep_going: bool,

    /// Build templates in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct IconsArgs {
    /// Text drawn on the icon
    #[arg(long, value_name = "TEXT")]
    pub label: Option<String>,

    /// Font file to try first (repeatable)
    #[arg(long, value_name = "PATH")]
    pub font: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_build_all() {
        let cli = Cli::try_parse_from(["localx-assets"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["localx-assets", "templates", "--json", "-vv", "--color", "never"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn only_accepts_comma_list() {
        let cli = Cli::try_parse_from([
            "localx-assets",
            "templates",
            "--only",
            "node,react",
            "--keep-going",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Templates(args)) => {
                assert_eq!(args.only, vec!["node", "react"]);
                assert!(args.keep_going);
                assert!(!args.parallel);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn font_is_repeatable() {
        let cli = Cli::try_parse_from([
            "localx-assets",
            "icons",
            "--font",
            "a.ttf",
            "--font",
            "b.ttf",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Icons(args)) => {
                assert_eq!(args.font, vec![PathBuf::from("a.ttf"), PathBuf::from("b.ttf")]);
                assert_eq!(args.label, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
