//! Key-value persistence for workspace state.
//!
//! This module provides the storage boundary for the name registry and the
//! per-name path lists:
//! - [`KeyValueStore`] - Trait for key-value storage operations
//! - [`JsonFileStore`] - JSON file-based storage implementation
//!
//! Every value is written back synchronously with the mutation that produced
//! it; there is no flush step.

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::workspace::error::WorkspaceError;

/// Trait for key-value storage operations (enables test doubles).
pub trait KeyValueStore {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn update(&self, key: &str, value: Value) -> Result<()>;
}

/// File-based key-value storage: one JSON object per file.
///
/// Updates are read-modify-write over the whole file. With a single
/// interactive actor there is nothing to race against; a concurrent external
/// writer would lose updates, which the data model tolerates.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file, creating parent directories
    /// as needed. The file itself is created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&contents)
            .map_err(|e| WorkspaceError::Corrupted(e.to_string()))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(WorkspaceError::Corrupted(format!(
                "expected a JSON object at the top level, found {other}"
            ))
            .into()),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn update(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);

        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("state.json")).unwrap()
    }

    #[test]
    fn get_missing_key_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(store.get("workspaceNames").unwrap().is_none());
    }

    #[test]
    fn update_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.update("workspaceNames", json!(["Work"])).unwrap();

        let value = store.get("workspaceNames").unwrap();
        assert_eq!(value, Some(json!(["Work"])));
    }

    #[test]
    fn update_preserves_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.update("workspaceNames", json!(["Work"])).unwrap();
        store
            .update("projectPaths_Work", json!(["/a", "/b"]))
            .unwrap();

        assert_eq!(
            store.get("workspaceNames").unwrap(),
            Some(json!(["Work"]))
        );
        assert_eq!(
            store.get("projectPaths_Work").unwrap(),
            Some(json!(["/a", "/b"]))
        );
    }

    #[test]
    fn update_replaces_existing_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.update("workspaceNames", json!(["Work"])).unwrap();
        store
            .update("workspaceNames", json!(["Work", "Home"]))
            .unwrap();

        assert_eq!(
            store.get("workspaceNames").unwrap(),
            Some(json!(["Work", "Home"]))
        );
    }

    #[test]
    fn open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("state.json");

        let store = JsonFileStore::open(nested).unwrap();
        store.update("k", json!(1)).unwrap();

        assert_eq!(store.get("k").unwrap(), Some(json!(1)));
    }

    #[test]
    fn corrupted_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open(path).unwrap();
        assert!(store.get("k").is_err());
    }

    #[test]
    fn non_object_top_level_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::open(path).unwrap();
        assert!(store.get("k").is_err());
    }
}
