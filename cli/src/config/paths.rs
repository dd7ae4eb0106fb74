//! Platform-specific path utilities for wsm.

use std::path::PathBuf;

use crate::error::{Result, WsmError};

/// Get the configuration directory for wsm.
///
/// - Linux: `~/.config/wsm`
/// - macOS: `~/Library/Application Support/wsm`
/// - Windows: `%APPDATA%\wsm`
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| WsmError::Config("Cannot determine config directory".to_string()))?;
    Ok(base.join("wsm"))
}

/// Get the data directory for wsm.
///
/// - Linux: `~/.local/share/wsm`
/// - macOS: `~/Library/Application Support/wsm`
/// - Windows: `%APPDATA%\wsm`
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| WsmError::Config("Cannot determine data directory".to_string()))?;
    Ok(base.join("wsm"))
}

/// Get the main configuration file path.
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the per-machine state file holding the name registry and path lists.
pub fn state_file() -> Result<PathBuf> {
    Ok(data_dir()?.join("state.json"))
}

/// Get the user-level settings file holding the snapshot archive.
///
/// Lives in the config directory rather than the data directory so that it
/// travels with user settings when those are copied between machines.
pub fn settings_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("settings.json"))
}

/// Ensure the data directory exists.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
