//! Snapshot sync and load command handlers.
//!
//! - [`handle_sync`] - Append a snapshot of every workspace to user settings
//! - [`handle_load`] - Pick a snapshot and restore the workspace list
//!
//! The snapshot archive lives in the user settings store so that copying
//! user settings between machines carries the workspace list along.

use crate::cli::commands::{open_registry, open_settings};
use crate::error::Result;
use crate::ui::{ConsoleUi, Ui};
use crate::workspace::snapshot::{
    append_snapshot, entry_label, format_timestamp, newest_first, read_archive,
};
use crate::workspace::{KeyValueStore, Registry, Snapshot};

/// Handles the `wsm sync` command.
///
/// # Errors
///
/// Returns an error if storage access fails.
pub fn handle_sync() -> Result<()> {
    let registry = open_registry()?;
    let settings = open_settings()?;
    sync_snapshots(&registry, &settings, &ConsoleUi)
}

/// Handles the `wsm load` command.
///
/// # Errors
///
/// Returns an error if storage access fails or the chosen snapshot is
/// malformed.
pub fn handle_load() -> Result<()> {
    let mut registry = open_registry()?;
    let settings = open_settings()?;
    load_snapshot(&mut registry, &settings, &ConsoleUi)
}

/// Captures the registry and every path list into a timestamped snapshot
/// and appends it to the archive.
pub fn sync_snapshots<S: KeyValueStore>(
    registry: &Registry<S>,
    settings: &impl KeyValueStore,
    ui: &impl Ui,
) -> Result<()> {
    let snapshot = Snapshot::capture(registry)?;
    append_snapshot(settings, &snapshot)?;

    let when = snapshot
        .timestamp
        .and_then(format_timestamp)
        .unwrap_or_else(|| "unknown time".to_string());
    ui.info(&format!(
        "Synced {} workspace(s) and {} path set(s) at {when}.",
        snapshot.names.len(),
        snapshot.paths.len()
    ));

    Ok(())
}

/// Presents the archive newest first and restores the workspace list from
/// the chosen snapshot.
///
/// Only the name list is restored; the per-name path lists already in the
/// state store are left as they are.
pub fn load_snapshot<S: KeyValueStore>(
    registry: &mut Registry<S>,
    settings: &impl KeyValueStore,
    ui: &impl Ui,
) -> Result<()> {
    let archive = read_archive(settings)?;
    if archive.is_empty() {
        ui.info("No snapshots to load.");
        return Ok(());
    }

    let sorted = newest_first(&archive);
    let labels: Vec<String> = sorted.iter().map(entry_label).collect();

    let Some(choice) = ui.pick("Load which snapshot?", &labels)? else {
        return Ok(());
    };

    let snapshot = Snapshot::from_value(&sorted[choice])?;

    registry.replace_names(snapshot.names)?;

    let when = snapshot
        .timestamp
        .and_then(format_timestamp)
        .unwrap_or_else(|| "no timestamp".to_string());
    ui.info(&format!("Restored workspace list from snapshot ({when})."));

    Ok(())
}
