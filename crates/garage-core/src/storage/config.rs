//! Configuration management
//!
//! Priority: CLI argument > GARAGE_* environment variable > config.toml > default

use super::Result;
use crate::core::ui_state::Theme;
use crate::display::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::error::StorageError;
use crate::storage::database::default_database_path;
use crate::utils::file::ensure_parent_exists;
use crate::utils::input::EnvConfigReader;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.toml";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// SQLite store location
    pub database_path: Option<PathBuf>,
    /// Rows per table page
    pub items_per_page: Option<usize>,
    pub theme: Option<Theme>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        ensure_parent_exists(&config_path)?;

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `~/.config/garage/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(home_dir.join(".config").join("garage").join(CONFIG_FILE))
    }

    /// Database path with fallback to GARAGE_DATABASE, then the data directory
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = EnvConfigReader::read_database_path() {
            return Ok(path);
        }
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => default_database_path(),
        }
    }

    /// Page size with fallback to GARAGE_PAGE_SIZE, then the table default
    pub fn items_per_page(&self) -> usize {
        EnvConfigReader::read_page_size()
            .or(self.items_per_page)
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn set_database_path(&mut self, path: PathBuf) {
        self.database_path = Some(path);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = Some(items_per_page);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.database_path.is_none());
        assert_eq!(config.theme(), Theme::Light);
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("garage").join(CONFIG_FILE);

        let mut config = Config::default();
        config.set_database_path(PathBuf::from("/tmp/garage.sqlite"));
        config.set_items_per_page(10);
        config.set_theme(Theme::Dark);

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path)).expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "items_per_page = \"many\"").expect("write");

        assert!(matches!(
            Config::load(Some(path)),
            Err(StorageError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_theme_serialized_lowercase() {
        let mut config = Config::default();
        config.set_theme(Theme::Dark);
        let text = toml::to_string(&config).expect("serialize");
        assert!(text.contains("theme = \"dark\""));
    }
}
