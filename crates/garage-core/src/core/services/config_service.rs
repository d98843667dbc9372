//! Configuration service for reading and updating the stored configuration

use crate::AppError;
use crate::core::ui_state::Theme;
use crate::storage::config::Config;
use crate::error::ConfigError;
use std::path::PathBuf;

/// Wraps a [`Config`] together with the file it was loaded from
pub struct ConfigService {
    config: Config,
    path: Option<PathBuf>,
}

impl ConfigService {
    /// `path` of `None` means the default config location
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> Result<PathBuf, AppError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_file_path()?),
        }
    }

    pub fn set_database_path(&mut self, path: PathBuf) {
        self.config.set_database_path(path);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), AppError> {
        if items_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "items_per_page".to_string(),
                value: items_per_page.to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        self.config.set_items_per_page(items_per_page);
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.config.set_theme(theme);
    }

    /// Save configuration to file
    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save(self.path.clone()).map_err(|e| e.into())
    }
}
