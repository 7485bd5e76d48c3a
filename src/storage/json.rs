//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads the entire file into memory once
//! - **Write**: O(n) - serializes and writes the entire dataset
//! - The stored data is a handful of preferences and builds, so this is
//!   far below any size where the strategy matters.

use crate::domain::error::{Result, ZevilityError};
use crate::storage::backend::Storage;
use crate::storage::models::{BuildRecord, Preferences};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// JSON storage container format.
///
/// Top-level structure serialized to disk. Wraps preferences and builds in a
/// single versioned object for future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Persisted user preferences.
    #[serde(default)]
    preferences: Preferences,

    /// Builds keyed by target name.
    #[serde(default)]
    builds: HashMap<String, BuildRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: Preferences::default(),
            builds: HashMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Stores preferences and builds in a human-readable JSON file with atomic
/// writes. The dataset is kept in memory and persisted on modification.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; designed to be owned by the single worker thread,
/// matching the Zellij plugin architecture.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": { "rows_per_page": 50, "updated_at": 1234567890 },
///   "builds": {
///     "Pleinair": {
///       "target": "Pleinair",
///       "evility_ids": [12, 288],
///       "updated_at": 1234567890
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since the last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty.
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(
            rows_per_page = ?data.preferences.rows_per_page,
            build_count = data.builds.len(),
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads storage data from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| ZevilityError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded storage data");
        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target
    /// path, so the file is never left half-written even on a crash.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename
    /// fails.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ZevilityError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn preferences(&self) -> Result<Preferences> {
        Ok(self.data.preferences.clone())
    }

    fn set_rows_per_page(&mut self, rows_per_page: i32) -> Result<()> {
        let _span =
            tracing::debug_span!("json_set_rows_per_page", rows_per_page = rows_per_page).entered();

        self.data.preferences.rows_per_page = Some(rows_per_page);
        self.data.preferences.updated_at = chrono::Utc::now().timestamp();

        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("rows-per-page preference saved");
        Ok(())
    }

    fn build(&self, target: &str) -> Result<Option<BuildRecord>> {
        Ok(self.data.builds.get(target).cloned())
    }

    fn add_to_build(&mut self, target: &str, evility_id: u32) -> Result<usize> {
        let _span = tracing::debug_span!("json_add_to_build",
            target = %target,
            evility_id = evility_id
        )
        .entered();

        let build = self
            .data
            .builds
            .entry(target.to_string())
            .or_insert_with(|| BuildRecord::new(target));

        let changed = build.add(evility_id);
        let count = build.evility_ids.len();

        if changed {
            self.dirty = true;
            self.save_to_file()?;
            tracing::debug!(build_size = count, "evility added to build");
        } else {
            tracing::debug!("evility already in build, no change");
        }

        Ok(count)
    }
}

impl Drop for JsonStorage {
    /// Ensures data is saved on drop even if a save was skipped earlier.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("zevility.json")
    }

    #[test]
    fn rows_per_page_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.set_rows_per_page(70).unwrap();
        }

        let reopened = JsonStorage::new(path).unwrap();
        assert_eq!(reopened.preferences().unwrap().rows_per_page, Some(70));
    }

    #[test]
    fn fresh_storage_has_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(storage_path(&dir)).unwrap();
        assert_eq!(storage.preferences().unwrap().rows_per_page, None);
    }

    #[test]
    fn stored_string_preference_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);
        std::fs::write(
            &path,
            r#"{"version":1,"preferences":{"rows_per_page":"50","updated_at":0},"builds":{}}"#,
        )
        .unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert_eq!(storage.preferences().unwrap().rows_per_page, Some(50));
    }

    #[test]
    fn malformed_preference_falls_back_to_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);
        std::fs::write(
            &path,
            r#"{"version":1,"preferences":{"rows_per_page":"all of them","updated_at":0},"builds":{}}"#,
        )
        .unwrap();

        let storage = JsonStorage::new(path).unwrap();
        assert_eq!(storage.preferences().unwrap().rows_per_page, None);
    }

    #[test]
    fn add_to_build_creates_and_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(storage.add_to_build("Pleinair", 12).unwrap(), 1);
        assert_eq!(storage.add_to_build("Pleinair", 288).unwrap(), 2);
        assert_eq!(storage.add_to_build("Pleinair", 12).unwrap(), 2);
        drop(storage);

        let reopened = JsonStorage::new(path).unwrap();
        let build = reopened.build("Pleinair").unwrap().unwrap();
        assert_eq!(build.evility_ids, vec![12, 288]);
        assert!(reopened.build("Etna").unwrap().is_none());
    }

    #[test]
    fn invalid_json_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = storage_path(&dir);
        std::fs::write(&path, "not json").unwrap();

        let err = JsonStorage::new(path).unwrap_err();
        assert!(matches!(err, ZevilityError::Storage(_)));
    }
}
