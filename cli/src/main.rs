//! wsm - Workspace Manager
//!
//! Saves named workspaces, each an ordered list of folders, and re-opens
//! them together in a new editor window. Snapshots of the whole workspace
//! list can be synced into user settings and loaded back on another machine.

mod cli;
mod config;
mod error;
mod launcher;
mod ui;
mod workspace;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::settings::env::LOG_LEVEL;
use crate::error::Result;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the command
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Create { name } => cli::commands::handle_create(name),
        Commands::Open { name } => cli::commands::handle_open(&name),
        Commands::List => cli::commands::handle_list(),
        Commands::Edit { name } => cli::commands::handle_edit(&name),
        Commands::Delete { name, yes } => cli::commands::handle_delete(&name, yes),
        Commands::Sync => cli::commands::handle_sync(),
        Commands::Load => cli::commands::handle_load(),
        Commands::Completions { shell } => cli::commands::handle_completions(shell),
    }
}
