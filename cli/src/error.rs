//! Error types and result aliases for wsm.
//!
//! This module provides the error handling system:
//! - Specific error variants for different failure modes
//! - User-friendly error messages
//! - Automatic conversion from common error types

use thiserror::Error;

use crate::workspace::WorkspaceError;

/// Main error type for wsm operations.
///
/// Each variant carries a user-facing message. Errors reach the user through
/// the top-level handler in `main`, which prints them and exits nonzero.
#[derive(Error, Debug)]
pub enum WsmError {
    /// General configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}. Check file permissions and format.")]
    ConfigRead(String),

    /// Failed to write configuration file.
    #[error("Failed to write configuration file: {0}. Check directory permissions.")]
    ConfigWrite(String),

    /// IO operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("Data serialization error: {0}. This may indicate corrupted data.")]
    Serialization(String),

    /// An interactive prompt failed for a reason other than cancellation.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The editor process could not be started.
    #[error("Failed to launch editor '{command}': {message}")]
    EditorLaunch {
        /// The editor command that was invoked.
        command: String,
        /// The underlying failure.
        message: String,
    },

    /// Workspace operation error.
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// Result type alias using [`WsmError`].
pub type Result<T> = std::result::Result<T, WsmError>;

impl From<serde_json::Error> for WsmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {err}"))
    }
}

impl From<toml::de::Error> for WsmError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigRead(format!("TOML parse error: {err}"))
    }
}

impl From<toml::ser::Error> for WsmError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigWrite(format!("TOML serialize error: {err}"))
    }
}

impl From<inquire::InquireError> for WsmError {
    fn from(err: inquire::InquireError) -> Self {
        Self::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_launch_includes_command() {
        let err = WsmError::EditorLaunch {
            command: "code".to_string(),
            message: "No such file or directory".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("code"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let wsm_err: WsmError = json_err.into();
        assert!(matches!(wsm_err, WsmError::Serialization(_)));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let wsm_err: WsmError = io_err.into();
        assert!(matches!(wsm_err, WsmError::Io(_)));
    }

    #[test]
    fn from_toml_parse_error() {
        let toml_err = toml::from_str::<toml::Value>("not [valid").unwrap_err();
        let wsm_err: WsmError = toml_err.into();
        assert!(matches!(wsm_err, WsmError::ConfigRead(_)));
    }
}
