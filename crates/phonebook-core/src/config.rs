//! Phonebook configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::store::IdPolicy;
use crate::Result;

pub const DEFAULT_STORAGE_KEY: &str = "phonebook";
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Key the entry collection is stored under
    pub storage_key: String,
    /// How new entry ids are assigned
    pub id_policy: IdPolicy,
    /// Rows per grid page
    pub page_size: usize,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("phonebook.db"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_policy: IdPolicy::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Read a JSON config file; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::Config("storage_key cannot be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(CoreError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os("PHONEBOOK_DATA_DIR") {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("Phonebook"))
            .unwrap_or_else(|| PathBuf::from(".phonebook"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/tmp/phonebook"));
        assert_eq!(config.storage_key, "phonebook");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.id_policy, IdPolicy::Length);
        assert_eq!(
            config.database_path,
            PathBuf::from("/tmp/phonebook/phonebook.db")
        );
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"id_policy": "sequential", "page_size": 10}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.id_policy, IdPolicy::Sequential);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.storage_key, "phonebook");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config.storage_key, "phonebook");
    }

    #[test]
    fn test_data_dir_defaults_to_platform_dir() {
        if std::env::var_os("PHONEBOOK_DATA_DIR").is_some() {
            return;
        }
        let expected = dirs::data_local_dir()
            .map(|d| d.join("Phonebook"))
            .unwrap_or_else(|| PathBuf::from(".phonebook"));
        assert_eq!(Config::data_dir(), expected);
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let mut config = Config::new(PathBuf::from("/tmp/phonebook"));
        config.page_size = 0;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
