use crate::storage::StorageType;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at an alternate config file.
pub const CONFIG_ENV: &str = "CRITTERPEDIA_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

const VALID_STORAGE_TYPES: &[&str] = &["json", "sqlite", "memory"];
const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

pub const KEYS: &[&str] = &["storage.type", "storage.path", "catalog.path", "timezone"];

fn validate_path(path: &str) -> Result<PathBuf, ConfigError> {
    // Check for null bytes and other invalid characters
    if path.contains('\0') {
        return Err(ConfigError::InvalidConfig(
            "Path contains invalid characters".to_string(),
        ));
    }
    if path.trim().is_empty() {
        return Err(ConfigError::InvalidConfig(
            "Path cannot be empty".to_string(),
        ));
    }

    Ok(PathBuf::from(shellexpand::tilde(path).as_ref()))
}

fn validate_storage_type(value: &str) -> Result<(), ConfigError> {
    if !VALID_STORAGE_TYPES.contains(&value) {
        return Err(ConfigError::InvalidConfig(format!(
            "storage.type must be one of: {}",
            VALID_STORAGE_TYPES.join(", ")
        )));
    }
    Ok(())
}

fn validate_timezone(value: &str) -> Result<Tz, ConfigError> {
    value
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidConfig(format!("Unknown timezone: {}", value)))
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage_type: Option<String>,
    #[serde(default)]
    pub storage_path: Option<String>,
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Config {
    pub fn with_defaults() -> Self {
        Self {
            storage_type: default_storage_type(),
            storage_path: default_storage_path(),
            catalog_path: None,
            timezone: Some(DEFAULT_TIMEZONE.to_string()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref storage_type) = self.storage_type {
            validate_storage_type(storage_type)?;
        }
        if let Some(ref path) = self.storage_path {
            validate_path(path)?;
        }
        if let Some(ref path) = self.catalog_path {
            validate_path(path)?;
        }
        if let Some(ref tz) = self.timezone {
            validate_timezone(tz)?;
        }
        Ok(())
    }

    fn value(&self, key: &str) -> Result<Option<String>, ConfigError> {
        Ok(match key {
            "storage.type" => self.storage_type.clone(),
            "storage.path" => self.storage_path.clone(),
            "catalog.path" => self.catalog_path.clone(),
            "timezone" => self.timezone.clone(),
            _ => return Err(ConfigError::InvalidKey(key.to_string())),
        })
    }
}

fn default_storage_type() -> Option<String> {
    Some("json".to_string())
}

fn default_storage_path() -> Option<String> {
    dirs::home_dir().map(|home| {
        home.join(".config")
            .join("critterpedia")
            .join("donations.json")
            .to_string_lossy()
            .to_string()
    })
}

fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config").join("critterpedia").join("config.json"))
        .ok_or_else(|| {
            ConfigError::InvalidConfig("Could not determine home directory".to_string())
        })
}

/// Reads and writes the user's config file. Unset keys fall back to
/// [`Config::with_defaults`].
pub struct ConfigManager {
    path: PathBuf,
    config: Config,
}

impl ConfigManager {
    pub fn new(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path()?,
        };

        let config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                Config::default()
            } else {
                let config: Config = serde_json::from_str(&contents)?;
                config.validate()?;
                config
            }
        } else {
            Config::default()
        };

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.config)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Effective value of `key`: the configured value, else the default.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.config.value(key) {
            Ok(Some(value)) => Some(value),
            Ok(None) => Config::with_defaults().value(key).ok().flatten(),
            Err(_) => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut config = self.config.clone();

        match key {
            "storage.type" => {
                validate_storage_type(value)?;
                if config.storage_type.as_deref() != Some(value) {
                    tracing::warn!("changing storage type does not migrate existing donations");
                }
                config.storage_type = Some(value.to_string());
            }
            "storage.path" => {
                let path = validate_path(value)?;
                config.storage_path = Some(path.to_string_lossy().to_string());
            }
            "catalog.path" => {
                let path = validate_path(value)?;
                config.catalog_path = Some(path.to_string_lossy().to_string());
            }
            "timezone" => {
                validate_timezone(value)?;
                config.timezone = Some(value.to_string());
            }
            _ => {
                return Err(ConfigError::InvalidKey(key.to_string()));
            }
        }
        config.validate()?;
        self.config = config;
        self.save()
    }

    pub fn unset(&mut self, key: &str) -> Result<(), ConfigError> {
        match key {
            "storage.type" => self.config.storage_type = None,
            "storage.path" => self.config.storage_path = None,
            "catalog.path" => self.config.catalog_path = None,
            "timezone" => self.config.timezone = None,
            _ => return Err(ConfigError::InvalidKey(key.to_string())),
        }
        self.save()
    }

    /// Every key with its effective value and whether that value is a default.
    pub fn list(&self) -> Vec<(String, String, bool)> {
        KEYS.iter()
            .map(|key| {
                let configured = self.config.value(key).ok().flatten();
                let is_default = configured.is_none();
                let value = self.get(key).unwrap_or_else(|| "null".to_string());
                (key.to_string(), value, is_default)
            })
            .collect()
    }

    pub fn storage_type(&self) -> StorageType {
        self.get("storage.type")
            .and_then(|s| StorageType::from_str(&s))
            .unwrap_or(StorageType::Json)
    }

    pub fn storage_path(&self) -> Option<PathBuf> {
        self.get("storage.path")
            .map(|s| PathBuf::from(shellexpand::tilde(&s).to_string()))
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.get("catalog.path")
            .map(|s| PathBuf::from(shellexpand::tilde(&s).to_string()))
    }

    pub fn timezone(&self) -> Tz {
        self.get("timezone")
            .and_then(|tz| tz.parse::<Tz>().ok())
            .unwrap_or(chrono_tz::America::Los_Angeles)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::test_utils::create_test_config_manager;
    use crate::storage::StorageType;

    #[test]
    fn test_config_manager() {
        let (mut manager, _temp_dir) = create_test_config_manager();

        assert!(manager.set("storage.type", "sqlite").is_ok());
        assert_eq!(manager.get("storage.type"), Some("sqlite".to_string()));
        assert_eq!(manager.storage_type(), StorageType::Sqlite);

        let storage_path = "~/.config/critterpedia/donations.db";
        assert!(manager.set("storage.path", storage_path).is_ok());
        assert_eq!(
            manager.get("storage.path"),
            Some(shellexpand::tilde(storage_path).to_string())
        );

        assert!(manager.set("timezone", "Europe/London").is_ok());
        assert_eq!(manager.timezone(), chrono_tz::Europe::London);

        assert!(manager.unset("timezone").is_ok());
        assert_eq!(manager.timezone(), chrono_tz::America::Los_Angeles);
    }

    #[test]
    fn test_config_manager_rejects_bad_values() {
        let (mut manager, _temp_dir) = create_test_config_manager();

        assert!(manager.set("storage.type", "csv").is_err());
        assert!(manager.set("timezone", "Mars/Olympus_Mons").is_err());
        assert!(manager.set("storage.path", "").is_err());
        assert!(manager.set("favourite.fish", "coelacanth").is_err());
        assert!(manager.unset("favourite.fish").is_err());
    }

    #[test]
    fn test_config_manager_persists() {
        let (mut manager, _temp_dir) = create_test_config_manager();
        manager.set("catalog.path", "/tmp/catalog.json").unwrap();

        let reopened = super::ConfigManager::new(Some(manager.path())).unwrap();
        assert_eq!(reopened.get("catalog.path"), Some("/tmp/catalog.json".to_string()));
    }

    #[test]
    fn test_config_manager_list() {
        let (manager, _temp_dir) = create_test_config_manager();
        let list = manager.list();
        assert_eq!(list.len(), super::KEYS.len());

        let storage_path = list
            .iter()
            .find(|(key, _, _)| key == "storage.path")
            .expect("storage.path should be listed");
        assert!(storage_path.1.contains("critterpedia_test"));
        assert!(!storage_path.2);

        let timezone = list
            .iter()
            .find(|(key, _, _)| key == "timezone")
            .expect("timezone should be listed");
        assert_eq!(timezone.1, "America/Los_Angeles");
        assert!(timezone.2);
    }
}
