//! Application configuration settings.

use serde::{Deserialize, Serialize};

/// Main configuration for wsm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WsmConfig {
    /// Editor launch settings.
    pub editor: EditorConfig,
}

/// Editor launch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Command used to launch the editor.
    pub command: String,
    /// Flag that requests a new editor window.
    pub new_window_flag: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: "code".to_string(),
            new_window_flag: "--new-window".to_string(),
        }
    }
}

/// Environment variables that can override configuration.
pub mod env {
    pub const EDITOR: &str = "WSM_EDITOR";
    pub const LOG_LEVEL: &str = "WSM_LOG";
}

impl WsmConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(editor) = std::env::var(env::EDITOR) {
            if !editor.trim().is_empty() {
                self.editor.command = editor;
            }
        }

        self
    }
}
