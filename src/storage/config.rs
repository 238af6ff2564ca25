use super::{create_storage, MemoryStorage, Storage, StorageType};
use crate::config::ConfigManager;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub storage_type: StorageType,
    pub storage_path: Option<PathBuf>,
}

impl StorageConfig {
    pub fn from_config_manager(manager: &ConfigManager) -> Self {
        Self {
            storage_type: manager.storage_type(),
            storage_path: manager.storage_path(),
        }
    }

    /// Opens the configured backend. When it cannot be opened the donation
    /// list still works, it just won't survive the process.
    pub fn open(&self) -> Box<dyn Storage> {
        let Some(path) = self.storage_path.as_deref() else {
            tracing::warn!("storage.path is not configured, donations will not be saved");
            return Box::new(MemoryStorage::new());
        };

        match create_storage(self.storage_type, path) {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "storage unavailable, donations will not be saved");
                Box::new(MemoryStorage::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::create_test_config_manager;

    #[test]
    fn test_storage_config_from_manager() {
        let (manager, temp_dir) = create_test_config_manager();
        let config = StorageConfig::from_config_manager(&manager);
        assert_eq!(config.storage_type, StorageType::Json);
        assert_eq!(config.storage_path, Some(temp_dir.path().join("test-data.json")));
    }

    #[test]
    fn test_storage_config_from_manager_with_custom_type() {
        let (mut manager, temp_dir) = create_test_config_manager();
        manager.set("storage.type", "sqlite").unwrap();
        let config = StorageConfig::from_config_manager(&manager);
        assert_eq!(config.storage_type, StorageType::Sqlite);
        assert_eq!(config.storage_path, Some(temp_dir.path().join("test-data.json")));
    }

    #[test]
    fn test_open_falls_back_to_memory() {
        let temp_dir = tempfile::tempdir().unwrap();
        // A directory where the database file should be makes sqlite fail to open
        let blocked = temp_dir.path().join("blocked");
        std::fs::create_dir(&blocked).unwrap();

        let config = StorageConfig {
            storage_type: StorageType::Sqlite,
            storage_path: Some(blocked),
        };
        let storage = config.open();
        assert!(!storage.is_persistent());
        storage.set_item("bugs", "A").unwrap();
        assert_eq!(storage.get_item("bugs").unwrap().as_deref(), Some("A"));
    }
}
