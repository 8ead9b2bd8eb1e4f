//! symbake - bake SF Symbol template SVGs into template PNGs.

use std::path::Path;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use symbake::cli::{self, Cli, Commands};
use symbake::config::{MANIFEST_FILE, Manifest};
use symbake::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    let manifest = match &cli.config {
        Some(path) => Manifest::load(path, true)?,
        None => Manifest::load(Path::new(MANIFEST_FILE), false)?,
    };

    match &cli.command {
        Commands::Render { args } => cli::render::render_icons(args, &manifest),
        Commands::Check { args } => cli::check::check_images(args, &manifest),
    }
}
