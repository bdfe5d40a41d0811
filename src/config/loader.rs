//! Configuration loader for users-cli
//!
//! Reads a single INI file through the `config` crate and deserializes it
//! into [`Settings`].

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};

use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Configuration file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "db.ini";

/// Loads [`Settings`] from an INI file
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration file path
    config_file: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given file.
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_file: config_file.into(),
        }
    }

    /// Get the configuration file path
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Load and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file does not exist
    /// - the file is not valid INI
    /// - a required `[postgres]` key is missing
    /// - validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            file = %self.config_file.display(),
            dbname = %settings.postgres.dbname,
            addr = %settings.postgres.addr(),
            "Configuration loaded"
        );

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        if !self.config_file.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                self.config_file.display()
            )));
        }

        let path = self.config_file.to_str().ok_or_else(|| {
            ConfigError::ParseError(format!(
                "Configuration path is not valid UTF-8: {}",
                self.config_file.display()
            ))
        })?;

        Config::builder()
            .add_source(File::new(path, FileFormat::Ini).required(true))
            .build()
            .map_err(ConfigError::from)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}
