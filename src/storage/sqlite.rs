use super::{Storage, StorageData, StorageError};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const INIT_SCHEMA: &str = r#"
-- One row per storage key
CREATE TABLE IF NOT EXISTS items (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = PathBuf::from(shellexpand::tilde(&path.as_ref().to_string_lossy()).to_string());
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(&path)
            .map_err(|e| StorageError::Storage(format!("Failed to open database: {}", e)))?;
        conn.execute_batch(INIT_SCHEMA)
            .map_err(|e| StorageError::Storage(format!("Failed to create tables: {}", e)))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn get_connection(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|e| StorageError::Storage(format!("Failed to lock connection: {}", e)))
    }
}

impl Storage for SqliteStorage {
    fn save(&self, data: &StorageData) -> Result<(), StorageError> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM items", [])?;
        for (key, value) in &data.items {
            tx.execute(
                "INSERT INTO items (key, value) VALUES (?1, ?2)",
                params![key, value],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn load(&self) -> Result<StorageData, StorageError> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare("SELECT key, value FROM items")
            .map_err(|e| StorageError::Storage(format!("Failed to prepare items query: {}", e)))?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(|e| StorageError::Storage(format!("Failed to query items: {}", e)))?;

        let mut data = StorageData::new();
        for row in rows {
            let (key, value) =
                row.map_err(|e| StorageError::Storage(format!("Failed to read item: {}", e)))?;
            data.items.insert(key, value);
        }
        Ok(data)
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.get_connection()?;
        let value = conn
            .query_row("SELECT value FROM items WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.get_connection()?;
        conn.execute(
            "INSERT INTO items (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.get_connection()?;
        conn.execute("DELETE FROM items WHERE key = ?1", [key])?;
        Ok(())
    }
}
