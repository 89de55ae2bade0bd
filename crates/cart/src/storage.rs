//! Durable string-keyed storage for the cart payload.
//!
//! The cart persists its state as a JSON string under a fixed key, the
//! server-side stand-in for the browser's localStorage. Storage is a trait
//! seam so tests substitute [`MemoryStorage`]; production uses
//! [`JsonFileStorage`], a single JSON object-of-strings file written
//! synchronously on every mutation.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Errors raised by cart storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file is not a valid JSON object of strings.
    #[error("malformed storage file {path}: {source}")]
    Malformed {
        /// Path of the backing file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Another holder of the in-memory store panicked while writing.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key-value store holding the persisted cart payload.
pub trait CartStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON object of strings per file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage handle for the given file path.
    ///
    /// The file is created on the first `set`; a missing file reads as
    /// empty.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|err| StorageError::Malformed {
            path: self.path.clone(),
            source: err,
        })
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let payload = serde_json::to_string_pretty(entries).map_err(|err| {
            StorageError::Malformed {
                path: self.path.clone(),
                source: err,
            }
        })?;
        std::fs::write(&self.path, payload).map_err(|err| StorageError::Io {
            path: self.path.clone(),
            source: err,
        })
    }
}

impl CartStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }
}

/// In-memory storage fake.
///
/// Clones share the same map, so a test can hand one handle to a store and
/// inspect (or reuse) the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("cart").unwrap(), None);
        storage.set("cart", "[]").unwrap();
        assert_eq!(storage.get("cart").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("cart", "[1]").unwrap();
        assert_eq!(handle.get("cart").unwrap(), Some("[1]".to_string()));
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        assert_eq!(storage.get("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        storage.set("cart", r#"[{"id":1}]"#).unwrap();
        storage.set("other", "x").unwrap();
        assert_eq!(
            storage.get("cart").unwrap(),
            Some(r#"[{"id":1}]"#.to_string())
        );

        // A fresh handle on the same path sees the persisted entries.
        let reopened = JsonFileStorage::new(storage.path());
        assert_eq!(reopened.get("other").unwrap(), Some("x".to_string()));
    }

    #[test]
    fn test_file_storage_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "not json").unwrap();
        let storage = JsonFileStorage::new(&path);
        assert!(matches!(
            storage.get("cart"),
            Err(StorageError::Malformed { .. })
        ));
    }
}
