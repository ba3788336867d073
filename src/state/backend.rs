use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// String key-value storage with the shape of browser-local storage.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// In-memory backend, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Backend persisted as a single JSON object file of key -> string value.
///
/// The file is re-read on every call, so several handles on the same path
/// never see stale data. A missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("items").unwrap(), None);

        store.set_item("items", "[]").unwrap();
        assert_eq!(store.get_item("items").unwrap().as_deref(), Some("[]"));

        store.remove_item("items").unwrap();
        assert!(!store.contains_key("items"));

        // Removing again is harmless
        store.remove_item("items").unwrap();
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("storage.json"));
        assert_eq!(store.get_item("items").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_handles() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut first = FileStore::open(&path);
        first.set_item("items", "[1]").unwrap();
        first.set_item("other", "x").unwrap();

        let second = FileStore::open(&path);
        assert_eq!(second.get_item("items").unwrap().as_deref(), Some("[1]"));
        assert_eq!(second.get_item("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_remove_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path);
        store.set_item("items", "[]").unwrap();
        store.set_item("other", "x").unwrap();
        store.remove_item("items").unwrap();

        assert_eq!(store.get_item("items").unwrap(), None);
        assert_eq!(store.get_item("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_remove_absent_key_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = FileStore::open(&path);
        store.remove_item("items").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_file_store_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get_item("items").is_err());
    }
}
