//! String-keyed local stores.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::atomic::{atomic_write, read_optional, remove_if_exists};
use crate::error::{PersistenceError, Result};

/// A local key-value store of opaque string values.
///
/// A missing key is `Ok(None)`, never an error.
pub trait LocalStore: Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Stores each key as a file in a directory.
///
/// ```text
/// base_path/
/// ├── auth-token
/// ├── auth-token-expiry
/// ├── user-data
/// └── rundownColorMap
/// ```
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Creates a new FileStore rooted at the given directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    /// Returns the file backing `key`.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(key))
    }
}

impl LocalStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        read_optional(&self.key_path(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        atomic_write(&path, value.as_bytes())?;
        debug!(key, "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        remove_if_exists(&self.key_path(key)?)
    }
}

/// In-memory store, used for ephemeral sessions and tests.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: RwLock::new(values),
        }
    }

    /// Returns true if `key` holds a value.
    pub fn contains(&self, key: &str) -> bool {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        values.contains_key(key)
    }
}

impl LocalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set(keys::AUTH_TOKEN, "t1").unwrap();

        assert_eq!(store.get(keys::AUTH_TOKEN).unwrap().as_deref(), Some("t1"));
        assert!(dir.path().join("auth-token").exists());
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("not-created-yet"));

        assert!(store.get(keys::USER_DATA).unwrap().is_none());
        store.remove(keys::USER_DATA).unwrap();
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.set(keys::COLOR_MAP, "{}").unwrap();
        store.remove(keys::COLOR_MAP).unwrap();

        assert!(store.get(keys::COLOR_MAP).unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(
                matches!(store.set(key, "x"), Err(PersistenceError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_entries([(keys::AUTH_TOKEN, "t1")]);
        assert!(store.contains(keys::AUTH_TOKEN));

        store.set(keys::USER_DATA, "{}").unwrap();
        store.remove(keys::AUTH_TOKEN).unwrap();

        assert!(!store.contains(keys::AUTH_TOKEN));
        assert_eq!(store.get(keys::USER_DATA).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_store_as_trait_object() {
        let dir = tempdir().unwrap();
        let stores: Vec<Box<dyn LocalStore>> =
            vec![Box::new(MemoryStore::new()), Box::new(FileStore::new(dir.path()))];

        for store in stores {
            store.set("k", "v").unwrap();
            assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        }
    }
}
