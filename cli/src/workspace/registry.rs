//! The workspace name registry and its per-name path lists.
//!
//! The registry is an ordered list of names persisted under one fixed key;
//! each name has an ordered folder-path list persisted under a derived key in
//! the same store. The registry is a list, not a set: duplicate names are
//! permitted and operations act on the first match by value.

use serde_json::json;

use crate::error::Result;
use crate::workspace::storage::KeyValueStore;

/// Fixed key holding the ordered list of workspace names.
pub const WORKSPACE_NAMES_KEY: &str = "workspaceNames";

const PATH_LIST_PREFIX: &str = "projectPaths_";

/// Derived storage key for a workspace's path list.
#[must_use]
pub fn path_list_key(name: &str) -> String {
    format!("{PATH_LIST_PREFIX}{name}")
}

/// The live workspace registry, owning its backing store.
///
/// Loaded once at command start; every mutating operation persists before it
/// returns, so the in-memory list and the store never drift within a run.
pub struct Registry<S: KeyValueStore> {
    names: Vec<String>,
    store: S,
}

impl<S: KeyValueStore> Registry<S> {
    /// Loads the registry from the store, treating an absent or unreadable
    /// value as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    pub fn load(store: S) -> Result<Self> {
        let names = match store.get(WORKSPACE_NAMES_KEY)? {
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { names, store })
    }

    /// The workspace names in display order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether `name` exists in the registry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Access to the backing store, for snapshot capture.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a new workspace name and persists the registry.
    ///
    /// The name is trimmed first; an empty or whitespace-only name is a
    /// silent no-op and returns `false`. Duplicates are permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    pub fn create(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        self.names.push(name.to_string());
        self.persist_names()?;
        Ok(true)
    }

    /// Applies an edit-session save: an optional rename plus the submitted
    /// path list. Returns the name the workspace ended up under.
    ///
    /// The rename part is a no-op when `new_name` trims to empty or
    /// `old_name` is not in the registry. When the rename happens, the first
    /// matching slot is updated in place and the old path-list key is cleared
    /// so the list cannot be retrieved under the old name. Independent of the
    /// rename, `paths` is written under the key for the current name.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage operation fails.
    pub fn save_edit(
        &mut self,
        old_name: &str,
        new_name: &str,
        paths: &[String],
    ) -> Result<String> {
        let new_name = new_name.trim();

        let mut current = old_name.to_string();
        if !new_name.is_empty() && new_name != old_name {
            if let Some(idx) = self.names.iter().position(|n| n == old_name) {
                self.names[idx] = new_name.to_string();
                self.persist_names()?;
                // Move the path list: the old key must not stay populated.
                self.store.update(&path_list_key(old_name), json!([]))?;
                current = new_name.to_string();
            }
        }

        self.set_path_list(&current, paths)?;
        Ok(current)
    }

    /// Removes the first matching registry entry and clears its path list.
    ///
    /// Returns `false` when `name` is not in the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage operation fails.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        let Some(idx) = self.names.iter().position(|n| n == name) else {
            return Ok(false);
        };

        self.names.remove(idx);
        self.persist_names()?;
        self.store.update(&path_list_key(name), json!([]))?;
        Ok(true)
    }

    /// The path list stored for `name`; absence means empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    pub fn path_list(&self, name: &str) -> Result<Vec<String>> {
        match self.store.get(&path_list_key(name))? {
            Some(value) => Ok(serde_json::from_value(value).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Writes the path list for `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    pub fn set_path_list(&self, name: &str, paths: &[String]) -> Result<()> {
        self.store.update(&path_list_key(name), json!(paths))
    }

    /// Replaces the registry contents wholesale and persists. Path lists are
    /// left untouched; only the name list changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    pub fn replace_names(&mut self, names: Vec<String>) -> Result<()> {
        self.names = names;
        self.persist_names()
    }

    fn persist_names(&self) -> Result<()> {
        self.store.update(WORKSPACE_NAMES_KEY, json!(self.names))
    }
}
