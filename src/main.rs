//! toolsite - static site shell for the makegifs.online converter suite.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod core;
mod embed;
mod generator;
mod logger;
mod pages;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{SiteConfig, init_config};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?);

    // The tool tables are compiled in; verify their invariants before any
    // render rather than failing mid-request.
    catalog::families::ensure_valid()?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Check {} => cli::check::check_site(&config),
    }
}
