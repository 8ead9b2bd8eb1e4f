//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render vendor symbol templates into template PNG icons
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Manifest path (default: icons.toml, optional)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render icons to `<icon-id>.png`
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Report content padding of rendered PNGs and flag clipped or blank ones
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Icon ids to render. If omitted, renders the whole catalog.
    #[arg(value_name = "ICON")]
    pub icons: Vec<String>,

    /// Output directory (default: [paths].output, then current directory)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Directory vendor templates are resolved against
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub resources: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Directory of PNGs to inspect (default: render output directory)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Alpha above which a pixel counts as content
    #[arg(short, long, default_value_t = 10)]
    pub threshold: u8,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Render { args } => args.verbose,
            Commands::Check { args } => args.verbose,
        }
    }
}
