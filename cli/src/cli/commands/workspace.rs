//! Workspace command handlers for the wsm CLI.
//!
//! This module implements the workspace management commands:
//! - [`handle_create`] - Add a workspace name (`wsm create`)
//! - [`handle_open`] - Open a workspace's folders in a new editor window (`wsm open`)
//! - [`handle_list`] - List all saved workspaces (`wsm list`)
//! - [`handle_edit`] - Interactive rename / folder editing (`wsm edit`)
//! - [`handle_delete`] - Delete a workspace (`wsm delete`)
//!
//! Each handler loads the registry from disk, runs one operation to
//! completion including its persistence writes, and returns. The interactive
//! flows are factored over the [`Ui`] and [`EditorLauncher`] traits so they
//! can be driven by scripted doubles in tests.

use crate::cli::args::ShellType;
use crate::cli::commands::open_registry;
use crate::config::{load_config, paths};
use crate::error::Result;
use crate::launcher::{CommandLauncher, EditorLauncher, WorkspaceDescriptor};
use crate::ui::{ConsoleUi, Ui};
use crate::workspace::{KeyValueStore, Registry};

/// Handles the `wsm create [name]` command.
///
/// Prompts for the name when it was not given on the command line.
///
/// # Errors
///
/// Returns an error if storage access fails.
pub fn handle_create(name: Option<String>) -> Result<()> {
    let mut registry = open_registry()?;
    create_workspace(&mut registry, name, &ConsoleUi)
}

/// Handles the `wsm open <name>` command.
///
/// # Errors
///
/// Returns an error if storage access fails or the editor cannot be started.
pub fn handle_open(name: &str) -> Result<()> {
    let registry = open_registry()?;
    let config = load_config()?;
    let launcher = CommandLauncher::new(config.editor, paths::ensure_data_dir()?);
    open_workspace(&registry, name, &ConsoleUi, &launcher)
}

/// Handles the `wsm list` command.
///
/// # Errors
///
/// Returns an error if storage access fails.
pub fn handle_list() -> Result<()> {
    let registry = open_registry()?;
    list_workspaces(&registry, &ConsoleUi)
}

/// Handles the `wsm edit <name>` command.
///
/// # Errors
///
/// Returns an error if storage access fails.
pub fn handle_edit(name: &str) -> Result<()> {
    let mut registry = open_registry()?;
    edit_session(&mut registry, name, &ConsoleUi)
}

/// Handles the `wsm delete <name>` command.
///
/// # Errors
///
/// Returns an error if storage access fails.
pub fn handle_delete(name: &str, yes: bool) -> Result<()> {
    let mut registry = open_registry()?;
    delete_workspace(&mut registry, name, yes, &ConsoleUi)
}

/// Appends a workspace name, prompting for it when absent.
///
/// A blank or cancelled name is a silent no-op.
pub fn create_workspace<S: KeyValueStore>(
    registry: &mut Registry<S>,
    name: Option<String>,
    ui: &impl Ui,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => match ui.input("Workspace name:", "")? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    if registry.create(&name)? {
        ui.info(&format!("Created workspace '{}'.", name.trim()));
    }

    Ok(())
}

/// Opens a workspace's folders together in a new editor window.
///
/// An empty path list is a "nothing to open" condition, reported as a
/// warning rather than a failure.
pub fn open_workspace<S: KeyValueStore>(
    registry: &Registry<S>,
    name: &str,
    ui: &impl Ui,
    launcher: &impl EditorLauncher,
) -> Result<()> {
    let folder_paths = registry.path_list(name)?;

    if folder_paths.is_empty() {
        ui.warn(&format!("Workspace '{name}' has no folders to open."));
        return Ok(());
    }

    ui.info(&format!("Opening workspace '{name}'."));
    launcher.open_new_window(&WorkspaceDescriptor::new(&folder_paths))
}

/// Renders the registry with per-workspace folder counts.
pub fn list_workspaces<S: KeyValueStore>(registry: &Registry<S>, ui: &impl Ui) -> Result<()> {
    if registry.names().is_empty() {
        ui.info("No workspaces saved yet.");
        ui.info("\nCreate one with: wsm create <name>");
        return Ok(());
    }

    ui.info("Saved workspaces:\n");
    for name in registry.names() {
        let count = registry.path_list(name)?.len();
        ui.info(&format!("  {name} ({count} folder(s))"));
    }

    Ok(())
}

/// Runs the interactive edit session for one workspace.
///
/// The session holds a working copy of the name and the path list; nothing
/// is persisted until Save. Delete removes the workspace immediately;
/// Cancel (or Esc anywhere in the menu) leaves everything unchanged.
pub fn edit_session<S: KeyValueStore>(
    registry: &mut Registry<S>,
    name: &str,
    ui: &impl Ui,
) -> Result<()> {
    if !registry.contains(name) {
        ui.warn(&format!("Workspace '{name}' not found."));
        return Ok(());
    }

    let mut working_name = name.to_string();
    let mut working_paths = registry.path_list(name)?;

    loop {
        let menu = vec![
            format!("Rename (currently '{working_name}')"),
            "Add folder".to_string(),
            "Remove folder".to_string(),
            "Save".to_string(),
            "Delete workspace".to_string(),
            "Cancel".to_string(),
        ];

        let Some(choice) = ui.pick(&format!("Edit '{name}':"), &menu)? else {
            return Ok(());
        };

        match choice {
            0 => {
                if let Some(value) = ui.input("New name:", &working_name)? {
                    working_name = value;
                }
            }
            1 => {
                if let Some(folder) = ui.pick_folder()? {
                    working_paths.push(folder);
                }
            }
            2 => {
                if working_paths.is_empty() {
                    ui.info("No folders to remove.");
                } else if let Some(idx) = ui.pick("Remove which folder?", &working_paths)? {
                    working_paths.remove(idx);
                }
            }
            3 => {
                let current = registry.save_edit(name, &working_name, &working_paths)?;
                ui.info(&format!("Saved workspace '{current}'."));
                return Ok(());
            }
            4 => {
                if registry.delete(name)? {
                    ui.info(&format!("Deleted workspace '{name}'."));
                }
                return Ok(());
            }
            _ => return Ok(()),
        }
    }
}

/// Deletes a workspace after confirmation.
pub fn delete_workspace<S: KeyValueStore>(
    registry: &mut Registry<S>,
    name: &str,
    yes: bool,
    ui: &impl Ui,
) -> Result<()> {
    if !registry.contains(name) {
        ui.warn(&format!("Workspace '{name}' not found."));
        return Ok(());
    }

    if !yes && ui.confirm(&format!("Delete workspace '{name}'?"))? != Some(true) {
        ui.info("Cancelled.");
        return Ok(());
    }

    if registry.delete(name)? {
        ui.info(&format!("Deleted workspace '{name}'."));
    }

    Ok(())
}

/// Handles the `wsm completions <shell>` command.
///
/// Generates shell completion scripts.
pub fn handle_completions(shell: ShellType) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell};

    let mut cmd = crate::cli::Cli::command();
    let shell = match shell {
        ShellType::Bash => Shell::Bash,
        ShellType::Zsh => Shell::Zsh,
        ShellType::Fish => Shell::Fish,
    };

    generate(shell, &mut cmd, "wsm", &mut std::io::stdout());

    Ok(())
}
