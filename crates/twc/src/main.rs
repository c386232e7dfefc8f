//! twc CLI - docs and registry build tooling for twc-ui.
//!
//! Provides commands for:
//! - `docs build`: Generate the docs navigation tree JSON
//! - `docs watch`: Regenerate the tree whenever docs change
//! - `docs show`: Print the navigation context of a document
//! - `registry create`: Generate the component registry manifest and alias mapping
//! - `sync changelog` / `sync readme`: Copy doc pages into root-level files

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DocsCommand, RegistryCommand, SyncCommand};
use output::Output;

/// twc - docs and registry tooling for twc-ui.
#[derive(Parser)]
#[command(name = "twc", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover twc.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Documentation tree commands.
    #[command(subcommand)]
    Docs(DocsCommand),
    /// Component registry commands.
    #[command(subcommand)]
    Registry(RegistryCommand),
    /// Copy doc pages into root-level files.
    #[command(subcommand)]
    Sync(SyncCommand),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Docs(cmd) => cmd.execute(config),
        Commands::Registry(cmd) => cmd.execute(config),
        Commands::Sync(cmd) => cmd.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
