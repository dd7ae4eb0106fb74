//! Workspace state management for wsm.
//!
//! This module holds the core state and its persistence:
//! - The name registry and per-name path lists
//! - Snapshot capture, archive append, and load-time validation
//! - The key-value storage boundary

pub mod error;
pub mod registry;
pub mod snapshot;
pub mod storage;

pub use error::WorkspaceError;
pub use registry::Registry;
pub use snapshot::Snapshot;
pub use storage::{JsonFileStore, KeyValueStore};
