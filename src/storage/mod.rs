// src/storage/mod.rs
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage key for the autofill record.
pub const AUTOFILL_KEY: &str = "autofillData";
/// Storage key for the schedule list (opt-in persistence only).
pub const SCHEDULES_KEY: &str = "scheduledSites";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Process-wide key-value storage area, the terminal analogue of the
/// extension's local storage: one JSON file per key inside a data directory.
/// Reads are lenient (any failure yields `None`); writes are last-writer-wins.
pub struct StorageArea {
    dir: PathBuf,
}

impl StorageArea {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads and deserializes the value stored under `key`. Missing keys and
    /// undeserializable values both come back as `None`; corruption is logged
    /// at warn and never surfaced to the caller.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.key_path(key);
        if !path.exists() {
            return None;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read stored value for '{}': {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Discarding undeserializable value for '{}': {}", key, e);
                None
            }
        }
    }

    /// Serializes `value` under `key`, replacing any previous value. Writes
    /// go through a temp file and rename so a crash never leaves a torn record.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let tmp = self.dir.join(format!("{key}.json.new"));
        fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Removes the value stored under `key`; no-op when absent.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileRecord;

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageArea::open(dir.path()).unwrap();

        let mut record = ProfileRecord::default();
        record.name = "Ravi".into();
        storage.set(AUTOFILL_KEY, &record).unwrap();

        let loaded: ProfileRecord = storage.get(AUTOFILL_KEY).unwrap();
        assert_eq!(loaded, record);
        assert!(storage.contains(AUTOFILL_KEY));
    }

    #[test]
    fn missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageArea::open(dir.path()).unwrap();
        assert!(storage.get::<ProfileRecord>(AUTOFILL_KEY).is_none());
    }

    #[test]
    fn corrupt_value_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageArea::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("autofillData.json"), "{not json").unwrap();
        assert!(storage.get::<ProfileRecord>(AUTOFILL_KEY).is_none());
    }

    #[test]
    fn remove_deletes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageArea::open(dir.path()).unwrap();
        storage.set(AUTOFILL_KEY, &ProfileRecord::default()).unwrap();
        storage.remove(AUTOFILL_KEY).unwrap();
        assert!(!storage.contains(AUTOFILL_KEY));
        // Removing again is a no-op.
        storage.remove(AUTOFILL_KEY).unwrap();
    }
}
