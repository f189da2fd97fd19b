//! Local device storage: a string key/value store that survives restarts.
//!
//! `FileStorage` keeps every key in one JSON object on disk and rewrites it atomically
//! (temp file + rename) on each change. `MemoryStorage` is the ephemeral variant.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

pub const STORAGE_FILE_NAME: &str = "local-storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not replace storage file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("could not encode storage value: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait DeviceStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens (creating the directory if needed) the storage file in `dir`.
    /// An unreadable or corrupt file is logged and treated as empty.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(STORAGE_FILE_NAME);

        let items = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt storage file {}: {e}", path.display());
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!(
            "Local storage opened at {} ({} keys)",
            path.display(),
            items.len()
        );
        Ok(Self { path, items })
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Puts `key` back the way it was before a write that failed to reach disk.
    fn restore(&mut self, key: &str, previous: Option<String>) {
        match previous {
            Some(value) => self.items.insert(key.to_string(), value),
            None => self.items.remove(key),
        };
    }

    fn flush(&self) -> Result<(), StorageError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(serde_json::to_string_pretty(&self.items)?.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

impl DeviceStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        let previous = self.items.insert(key.to_string(), value);
        if let Err(e) = self.flush() {
            self.restore(key, previous);
            return Err(e);
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        let Some(previous) = self.items.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.restore(key, Some(previous));
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut storage = FileStorage::open(dir.path()).unwrap();
            storage.set_item("token", "abc".to_string()).unwrap();
            storage.set_item("user", "{}".to_string()).unwrap();
            storage.remove_item("user").unwrap();
        }
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
        assert_eq!(storage.get_item("user"), None);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_FILE_NAME), "not json").unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get_item("token"), None);
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        let mut storage = FileStorage::open(&nested).unwrap();
        storage.set_item("k", "v".to_string()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("store");
        let mut storage = FileStorage::open(&root).unwrap();
        storage.set_item("token", "abc".to_string()).unwrap();

        fs::remove_dir_all(&root).unwrap();
        assert!(storage.set_item("token", "xyz".to_string()).is_err());
        assert!(storage.set_item("user", "{}".to_string()).is_err());
        assert!(storage.remove_item("token").is_err());

        assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
        assert_eq!(storage.get_item("user"), None);
    }

    #[test]
    fn test_memory_storage() {
        let mut storage = MemoryStorage::new();
        storage.set_item("theme", "dark".to_string()).unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
        storage.remove_item("theme").unwrap();
        assert_eq!(storage.get_item("theme"), None);
    }
}
