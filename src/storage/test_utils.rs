use crate::config::ConfigManager;
use crate::storage::{JsonStorage, Storage, StorageData};
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestStorage {
    temp_dir: TempDir,
    storage: Box<dyn Storage>,
}

impl TestStorage {
    pub fn new() -> Self {
        let temp_dir = tempfile::Builder::new()
            .prefix("critterpedia_test")
            .tempdir()
            .expect("Failed to create temporary directory");

        let storage = Box::new(JsonStorage::new(temp_dir.path().join("test_storage.json")));
        storage
            .save(&StorageData::new())
            .expect("Failed to initialize test storage");

        Self { temp_dir, storage }
    }

    /// A store pre-seeded with `items`, as if an earlier session had saved them.
    pub fn with_items(items: &[(&str, &str)]) -> Self {
        let test_storage = Self::new();
        for (key, value) in items {
            test_storage
                .storage()
                .set_item(key, value)
                .expect("Failed to seed test storage");
        }
        test_storage
    }

    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }
}

/// Creates a config manager whose config file and donation store both live in
/// a temporary directory, so tests never touch the user's real files.
pub fn create_test_config_manager() -> (ConfigManager, TempDir) {
    let temp_dir = tempfile::Builder::new()
        .prefix("critterpedia_test")
        .tempdir()
        .expect("Failed to create temporary directory");

    let config_path = temp_dir.path().join("config.json");
    let storage_path = temp_dir
        .path()
        .join("test-data.json")
        .to_str()
        .unwrap()
        .to_string();

    let mut config_manager =
        ConfigManager::new(Some(config_path.as_path())).expect("Failed to create config manager");
    config_manager
        .set("storage.path", &storage_path)
        .expect("Failed to set storage.path");

    (config_manager, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_initialization() {
        let test_storage = TestStorage::new();
        let data = test_storage
            .storage()
            .load()
            .expect("Failed to load storage");
        assert!(data.items.is_empty());
        assert!(test_storage.path().join("test_storage.json").exists());
    }

    #[test]
    fn test_seeded_storage() {
        let test_storage = TestStorage::with_items(&[("bugs", "A,B")]);
        assert_eq!(
            test_storage.storage().get_item("bugs").unwrap().as_deref(),
            Some("A,B")
        );
    }

    #[test]
    fn test_config_manager() {
        let (config_manager, _temp_dir) = create_test_config_manager();

        let storage_path = config_manager
            .get("storage.path")
            .expect("Storage path not set");
        assert!(storage_path.contains("critterpedia_test"));
    }
}
