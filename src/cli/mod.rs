//! CLI adapter for Arkivo
//!
//! Provides a command-line interface over the core services. This
//! module depends only on `core/` and owns all presentation concerns
//! (argument parsing, output formatting, exit codes).

pub mod commands;
pub mod output;

use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::{Parser, Subcommand};

/// Arkivo - Federated Archive Search
///
/// Search one or more offline content archives as a single ranked
/// result space and print matched documents as HTML or Markdown.
#[derive(Parser, Debug)]
#[command(name = "arkivo")]
#[command(version)]
#[command(about = "Federated search over offline content archives", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the archives and print the matched document
    Search(commands::SearchArgs),

    /// List open archives and their metadata
    Archives(commands::ArchivesArgs),

    /// Pack a directory of documents into an archive bundle
    Pack(commands::PackArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        // Pack authors a new bundle and needs no configured archives
        Commands::Pack(args) => commands::pack::execute(args, cli.format),
        Commands::Search(args) => {
            let config = load_config()?;
            commands::search::execute(args, &config, cli.format)
        }
        Commands::Archives(args) => {
            let config = load_config()?;
            commands::archives::execute(args, &config, cli.format)
        }
    }
}

fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    Ok(Config::load()?)
}
