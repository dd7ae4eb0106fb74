//! Command-line argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

/// Workspace manager.
///
/// Saves named workspaces, each an ordered list of folders, and re-opens
/// them together in a new editor window. Snapshots of the whole workspace
/// list can be synced into user settings and loaded back on another machine.
#[derive(Parser, Debug)]
#[command(name = "wsm")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new workspace.
    ///
    /// Appends the name to the workspace list. Prompts for the name when it
    /// is omitted. A blank name is silently ignored.
    Create {
        /// Name for the new workspace.
        name: Option<String>,
    },

    /// Open a workspace's folders in a new editor window.
    Open {
        /// Name of the workspace to open.
        name: String,
    },

    /// List all saved workspaces.
    List,

    /// Edit a workspace interactively.
    ///
    /// Rename it, add or remove folders, save, or delete it. Cancelling
    /// leaves everything unchanged.
    Edit {
        /// Name of the workspace to edit.
        name: String,
    },

    /// Delete a workspace.
    Delete {
        /// Name of the workspace to delete.
        name: String,

        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Save a snapshot of every workspace into user settings.
    ///
    /// Snapshots accumulate; each sync appends a timestamped copy of the
    /// whole workspace list and its folder lists.
    Sync,

    /// Load a snapshot from user settings.
    ///
    /// Presents saved snapshots newest first and restores the workspace
    /// list from the chosen one.
    Load,

    /// Generate shell completion scripts.
    ///
    /// Outputs completion script for the specified shell.
    /// Follow shell-specific instructions to install.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: ShellType,
    },
}

/// Supported shell types for completions.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}
