//! Command implementations.

pub mod sync;
pub mod workspace;

#[cfg(test)]
pub(crate) mod fakes;

pub use sync::{handle_load, handle_sync};
pub use workspace::{
    handle_completions, handle_create, handle_delete, handle_edit, handle_list, handle_open,
};

use crate::config::paths;
use crate::error::Result;
use crate::workspace::{JsonFileStore, Registry};

/// Loads the live registry from the per-machine state file.
pub(crate) fn open_registry() -> Result<Registry<JsonFileStore>> {
    let store = JsonFileStore::open(paths::state_file()?)?;
    Registry::load(store)
}

/// Opens the user settings store holding the snapshot archive.
pub(crate) fn open_settings() -> Result<JsonFileStore> {
    JsonFileStore::open(paths::settings_file()?)
}
