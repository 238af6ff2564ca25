use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod config;
pub mod json;
pub mod memory;
pub mod sqlite;

pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Everything a backend persists: a flat string-to-string map.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageData {
    pub version: u32, // File format version
    #[serde(default)]
    pub items: BTreeMap<String, String>,
    pub last_sync: DateTime<Utc>,
}

impl StorageData {
    pub fn new() -> Self {
        Self {
            version: 1,
            items: BTreeMap::new(),
            last_sync: Utc::now(),
        }
    }
}

impl Default for StorageData {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    Json,
    Sqlite,
    Memory,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(StorageType::Json),
            "sqlite" => Some(StorageType::Sqlite),
            "memory" => Some(StorageType::Memory),
            _ => None,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            StorageType::Json => "json",
            StorageType::Sqlite => "sqlite",
            StorageType::Memory => "memory",
        }
    }
}

/// Key-value store in the shape of browser local storage.
///
/// Backends only have to implement whole-snapshot `save`/`load`; the item
/// accessors are built on top of those and may be overridden when a backend
/// can address a single key directly.
pub trait Storage: Send + Sync {
    fn save(&self, data: &StorageData) -> Result<(), StorageError>;
    fn load(&self) -> Result<StorageData, StorageError>;

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut data = self.load()?;
        data.items.insert(key.to_string(), value.to_string());
        data.last_sync = Utc::now();
        self.save(&data)
    }

    /// Whether saved items outlive the process.
    fn is_persistent(&self) -> bool {
        true
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut data = self.load()?;
        if data.items.remove(key).is_some() {
            data.last_sync = Utc::now();
            self.save(&data)?;
        }
        Ok(())
    }
}

pub fn create_storage(
    storage_type: StorageType,
    path: &Path,
) -> Result<Box<dyn Storage>, StorageError> {
    tracing::debug!(storage_type = storage_type.to_str(), path = %path.display(), "opening storage");
    match storage_type {
        StorageType::Json => Ok(Box::new(JsonStorage::new(path))),
        StorageType::Sqlite => Ok(Box::new(SqliteStorage::new(path)?)),
        StorageType::Memory => Ok(Box::new(MemoryStorage::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_factory() {
        let temp_dir = tempfile::tempdir().unwrap();

        for (storage_type, file) in [
            (StorageType::Json, "donations.json"),
            (StorageType::Sqlite, "donations.db"),
            (StorageType::Memory, "unused"),
        ] {
            let storage = create_storage(storage_type, &temp_dir.path().join(file)).unwrap();
            assert_eq!(storage.get_item("bugs").unwrap(), None);
            assert_eq!(storage.is_persistent(), storage_type != StorageType::Memory);

            storage.set_item("bugs", "Common Butterfly,Mole Cricket").unwrap();
            assert_eq!(
                storage.get_item("bugs").unwrap().as_deref(),
                Some("Common Butterfly,Mole Cricket")
            );

            storage.remove_item("bugs").unwrap();
            assert_eq!(storage.get_item("bugs").unwrap(), None);
        }
    }

    #[test]
    fn test_storage_type_names() {
        assert_eq!(StorageType::from_str("SQLite"), Some(StorageType::Sqlite));
        assert_eq!(StorageType::from_str("csv"), None);
        assert_eq!(StorageType::Memory.to_str(), "memory");
    }
}
