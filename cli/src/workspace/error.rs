//! Workspace-specific error types.

use thiserror::Error;

/// Errors specific to workspace state and snapshot operations.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Persisted state could not be parsed.
    #[error("Workspace data corrupted: {0}")]
    Corrupted(String),

    /// A snapshot entry failed the shape check at load time.
    #[error("Snapshot has an unexpected format: {0}")]
    BadSnapshot(String),
}

impl WorkspaceError {
    /// Checks whether this error came from a malformed snapshot.
    #[allow(dead_code)] // Used in tests
    #[must_use]
    pub const fn is_bad_snapshot(&self) -> bool {
        matches!(self, Self::BadSnapshot(_))
    }
}
