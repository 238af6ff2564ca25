use super::{Storage, StorageData, StorageError};
use std::sync::Mutex;

/// Non-persistent store. Used when no durable backend is available, so
/// donations still work for the lifetime of the process.
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<StorageData>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        let mut guard = self
            .data
            .lock()
            .map_err(|e| StorageError::Storage(format!("Failed to lock memory storage: {}", e)))?;
        *guard = data.clone();
        Ok(())
    }

    fn load(&self) -> Result<StorageData, StorageError> {
        self.data
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| StorageError::Storage(format!("Failed to lock memory storage: {}", e)))
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
