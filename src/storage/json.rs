use super::{Storage, StorageData, StorageError};
use std::path::{Path, PathBuf};

/// Donation store kept in a single pretty-printed JSON file.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = shellexpand::tilde(&path.as_ref().to_string_lossy()).to_string();
        Self {
            path: PathBuf::from(path),
        }
    }
}

impl Storage for JsonStorage {
    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        // Create parent directories if they don't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;

        // Verify the write was successful by reading back
        let contents = std::fs::read_to_string(&self.path)?;
        let read_data: StorageData = serde_json::from_str(&contents)?;
        if read_data.items.len() != data.items.len() {
            return Err(StorageError::Storage(
                "Data integrity check failed".to_string(),
            ));
        }

        Ok(())
    }

    fn load(&self) -> Result<StorageData, StorageError> {
        if !self.path.exists() {
            return Ok(StorageData::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(StorageData::new());
        }

        let data: StorageData = serde_json::from_str(&contents)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_storage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(temp_dir.path().join("nested").join("donations.json"));

        let mut data = StorageData::new();
        data.items.insert("bugs".to_string(), "A,B".to_string());
        data.items.insert("fishes".to_string(), String::new());
        storage.save(&data).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.items.len(), 2);
        assert_eq!(loaded.items["bugs"], "A,B");
        assert_eq!(loaded.items["fishes"], "");
    }

    #[test]
    fn test_json_storage_missing_or_empty_file() {
        let temp_dir = tempfile::Builder::new()
            .prefix("critterpedia_test_json")
            .tempdir()
            .expect("Failed to create temporary directory");
        let path = temp_dir.path().join("donations.json");

        let storage = JsonStorage::new(&path);
        assert!(storage.load().unwrap().items.is_empty());

        std::fs::write(&path, "   \n").unwrap();
        assert!(storage.load().unwrap().items.is_empty());
    }

    #[test]
    fn test_json_storage_rejects_garbage() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("donations.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = JsonStorage::new(&path);
        assert!(matches!(storage.load(), Err(StorageError::Serialization(_))));
    }
}
