//! Editor launching for wsm.
//!
//! This module provides a trait-based abstraction over the editor launch:
//! - [`EditorLauncher`] - Trait for opening a folder set in a new window
//! - [`CommandLauncher`] - Implementation that writes a workspace descriptor
//!   file and spawns the configured editor command
//!
//! The descriptor uses the multi-root `.code-workspace` layout, an ordered
//! `folders` array of `{ "path": ... }` entries. It is transient: the next
//! open overwrites it, and nothing reads it back.

use std::path::PathBuf;
use std::process::Command;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::{Result, WsmError};

/// One folder entry in a workspace descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct FolderEntry {
    /// Absolute folder path.
    pub path: String,
}

/// A transient multi-root workspace descriptor.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceDescriptor {
    /// Folders to open, in order.
    pub folders: Vec<FolderEntry>,
}

impl WorkspaceDescriptor {
    /// Builds a descriptor from an ordered list of folder paths.
    #[must_use]
    pub fn new(paths: &[String]) -> Self {
        Self {
            folders: paths
                .iter()
                .map(|path| FolderEntry { path: path.clone() })
                .collect(),
        }
    }
}

/// Trait for opening a composed workspace in a new editor window (enables
/// test doubles).
pub trait EditorLauncher {
    /// Opens the descriptor's folders together in a new editor window.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor cannot be written or the editor
    /// process cannot be started.
    fn open_new_window(&self, descriptor: &WorkspaceDescriptor) -> Result<()>;
}

/// Launcher that writes the descriptor to a scratch file and spawns the
/// configured editor command with its new-window flag.
pub struct CommandLauncher {
    editor: EditorConfig,
    scratch_dir: PathBuf,
}

impl CommandLauncher {
    /// Creates a launcher writing descriptors under `scratch_dir`.
    #[must_use]
    pub fn new(editor: EditorConfig, scratch_dir: PathBuf) -> Self {
        Self {
            editor,
            scratch_dir,
        }
    }

    /// Writes the descriptor file and returns its path.
    fn write_descriptor(&self, descriptor: &WorkspaceDescriptor) -> Result<PathBuf> {
        if !self.scratch_dir.exists() {
            std::fs::create_dir_all(&self.scratch_dir)?;
        }

        let path = self.scratch_dir.join("wsm.code-workspace");
        let json = serde_json::to_string_pretty(descriptor)?;
        std::fs::write(&path, json)?;

        Ok(path)
    }
}

impl EditorLauncher for CommandLauncher {
    fn open_new_window(&self, descriptor: &WorkspaceDescriptor) -> Result<()> {
        let descriptor_path = self.write_descriptor(descriptor)?;

        tracing::debug!(
            editor = %self.editor.command,
            descriptor = %descriptor_path.display(),
            "launching editor"
        );

        Command::new(&self.editor.command)
            .arg(&self.editor.new_window_flag)
            .arg(&descriptor_path)
            .spawn()
            .map_err(|e| WsmError::EditorLaunch {
                command: self.editor.command.clone(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
