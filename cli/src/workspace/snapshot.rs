//! Snapshot capture, archive append, and load-time validation.
//!
//! A snapshot is a point-in-time copy of the name registry and every name's
//! path list, stamped with epoch millis. Snapshots accumulate append-only in
//! the user settings store; none is ever mutated or removed. Validation is
//! deliberately shallow and happens only when a snapshot is chosen at load
//! time: `names` must be a sequence and `paths` a mapping.

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::workspace::error::WorkspaceError;
use crate::workspace::registry::Registry;
use crate::workspace::storage::KeyValueStore;

/// Fixed user-settings key holding the snapshot archive.
pub const SNAPSHOT_ARCHIVE_KEY: &str = "workspaceSnapshots";

/// A point-in-time copy of the registry and its path lists.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Registry names at capture time, in display order.
    pub names: Vec<String>,

    /// Path list per name at capture time.
    pub paths: BTreeMap<String, Vec<String>>,

    /// Capture time in epoch millis. Absent in archives written by hand or
    /// by older tooling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Snapshot {
    /// Captures the live registry and every name's path list, stamped now.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage read fails.
    pub fn capture<S: KeyValueStore>(registry: &Registry<S>) -> Result<Self> {
        let mut paths = BTreeMap::new();
        for name in registry.names() {
            paths.insert(name.clone(), registry.path_list(name)?);
        }

        Ok(Self {
            names: registry.names().to_vec(),
            paths,
            timestamp: Some(Utc::now().timestamp_millis()),
        })
    }

    /// Decodes a raw archive entry with a shallow shape check.
    ///
    /// `names` must be a JSON sequence and `paths` a JSON mapping; elements
    /// of the wrong type inside them are dropped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::BadSnapshot`] when the shape check fails.
    pub fn from_value(value: &Value) -> std::result::Result<Self, WorkspaceError> {
        let names = value
            .get("names")
            .and_then(Value::as_array)
            .ok_or_else(|| WorkspaceError::BadSnapshot("'names' is not a sequence".to_string()))?;
        let paths = value
            .get("paths")
            .and_then(Value::as_object)
            .ok_or_else(|| WorkspaceError::BadSnapshot("'paths' is not a mapping".to_string()))?;

        let names = names
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();

        let paths = paths
            .iter()
            .map(|(name, list)| {
                let list = list
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|i| i.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();
                (name.clone(), list)
            })
            .collect();

        Ok(Self {
            names,
            paths,
            timestamp: entry_timestamp(value),
        })
    }
}

/// Reads the archive sequence from the settings store; absence or a
/// non-sequence value reads as empty.
///
/// # Errors
///
/// Returns an error if the storage read fails.
pub fn read_archive(settings: &impl KeyValueStore) -> Result<Vec<Value>> {
    match settings.get(SNAPSHOT_ARCHIVE_KEY)? {
        Some(Value::Array(entries)) => Ok(entries),
        _ => Ok(Vec::new()),
    }
}

/// Appends a snapshot to the archive: read the whole sequence, push, write
/// it back. Not transactional; a single interactive actor makes the
/// read-modify-write window acceptable.
///
/// # Errors
///
/// Returns an error if a storage operation fails.
pub fn append_snapshot(settings: &impl KeyValueStore, snapshot: &Snapshot) -> Result<()> {
    let mut archive = read_archive(settings)?;
    archive.push(serde_json::to_value(snapshot)?);
    settings.update(SNAPSHOT_ARCHIVE_KEY, Value::Array(archive))
}

/// Timestamp of a raw archive entry, read shallowly.
#[must_use]
pub fn entry_timestamp(entry: &Value) -> Option<i64> {
    entry.get("timestamp").and_then(Value::as_i64)
}

/// Human-readable label for a raw archive entry.
#[must_use]
pub fn entry_label(entry: &Value) -> String {
    entry_timestamp(entry)
        .and_then(format_timestamp)
        .unwrap_or_else(|| "no timestamp".to_string())
}

/// Renders epoch millis as a UTC timestamp, when in range.
#[must_use]
pub fn format_timestamp(millis: i64) -> Option<String> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Returns a copy of the archive sorted newest first.
///
/// The sort is stable: entries with equal timestamps keep their archive
/// order. A missing timestamp sorts as 0.
#[must_use]
pub fn newest_first(archive: &[Value]) -> Vec<Value> {
    let mut sorted = archive.to_vec();
    sorted.sort_by_key(|entry| std::cmp::Reverse(entry_timestamp(entry).unwrap_or(0)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::storage::JsonFileStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn settings_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::open(dir.path().join("settings.json")).unwrap()
    }

    fn registry_in(dir: &TempDir) -> Registry<JsonFileStore> {
        let store = JsonFileStore::open(dir.path().join("state.json")).unwrap();
        Registry::load(store).unwrap()
    }

    #[test]
    fn capture_includes_every_name_and_its_paths() {
        let temp_dir = TempDir::new().unwrap();
        let mut registry = registry_in(&temp_dir);
        registry.create("Work").unwrap();
        registry.create("Home").unwrap();
        registry
            .set_path_list("Work", &["/a".to_string(), "/b".to_string()])
            .unwrap();

        let snapshot = Snapshot::capture(&registry).unwrap();

        assert_eq!(snapshot.names, ["Work", "Home"]);
        assert_eq!(
            snapshot.paths.get("Work").unwrap(),
            &["/a".to_string(), "/b".to_string()]
        );
        assert!(snapshot.paths.get("Home").unwrap().is_empty());
        assert!(snapshot.timestamp.is_some());
    }

    #[test]
    fn append_then_read_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings_in(&temp_dir);
        let registry = registry_in(&temp_dir);

        let snapshot = Snapshot::capture(&registry).unwrap();
        append_snapshot(&settings, &snapshot).unwrap();
        append_snapshot(&settings, &snapshot).unwrap();

        let archive = read_archive(&settings).unwrap();
        assert_eq!(archive.len(), 2);
        assert!(archive[0].get("names").is_some());
    }

    #[test]
    fn empty_archive_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let settings = settings_in(&temp_dir);

        assert!(read_archive(&settings).unwrap().is_empty());
    }

    #[test]
    fn from_value_accepts_well_formed_entry() {
        let entry = json!({
            "names": ["Work"],
            "paths": { "Work": ["/a", "/b"] },
            "timestamp": 1_700_000_000_000_i64,
        });

        let snapshot = Snapshot::from_value(&entry).unwrap();

        assert_eq!(snapshot.names, ["Work"]);
        assert_eq!(
            snapshot.paths.get("Work").unwrap(),
            &["/a".to_string(), "/b".to_string()]
        );
        assert_eq!(snapshot.timestamp, Some(1_700_000_000_000));
    }

    #[test]
    fn from_value_rejects_non_sequence_names() {
        let entry = json!({ "names": "Work", "paths": {} });
        let err = Snapshot::from_value(&entry).unwrap_err();
        assert!(err.is_bad_snapshot());
    }

    #[test]
    fn from_value_rejects_non_mapping_paths() {
        let entry = json!({ "names": [], "paths": ["nope"] });
        let err = Snapshot::from_value(&entry).unwrap_err();
        assert!(err.is_bad_snapshot());
    }

    #[test]
    fn from_value_tolerates_missing_timestamp() {
        let entry = json!({ "names": [], "paths": {} });
        let snapshot = Snapshot::from_value(&entry).unwrap();
        assert_eq!(snapshot.timestamp, None);
    }

    #[test]
    fn newest_first_sorts_descending_with_stable_ties() {
        let archive = vec![
            json!({ "names": ["a"], "paths": {}, "timestamp": 100 }),
            json!({ "names": ["b"], "paths": {}, "timestamp": 300 }),
            json!({ "names": ["c"], "paths": {}, "timestamp": 300 }),
            json!({ "names": ["d"], "paths": {} }),
        ];

        let sorted = newest_first(&archive);

        assert_eq!(sorted[0]["names"][0], "b");
        assert_eq!(sorted[1]["names"][0], "c");
        assert_eq!(sorted[2]["names"][0], "a");
        assert_eq!(sorted[3]["names"][0], "d");
    }

    #[test]
    fn entry_label_renders_timestamp_or_placeholder() {
        let stamped = json!({ "timestamp": 1_700_000_000_000_i64 });
        assert!(entry_label(&stamped).contains("2023"));

        let unstamped = json!({});
        assert_eq!(entry_label(&unstamped), "no timestamp");
    }

    #[test]
    fn serialized_snapshot_omits_absent_timestamp() {
        let snapshot = Snapshot {
            names: vec![],
            paths: BTreeMap::new(),
            timestamp: None,
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value.get("timestamp").is_none());
    }
}
