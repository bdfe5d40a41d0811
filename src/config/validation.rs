//! Configuration validation logic

use crate::config::error::ConfigError;
use crate::config::settings::{LoggerSettings, PostgresSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl PostgresSettings {
    /// Validate postgres configuration
    ///
    /// # Validation Rules
    /// - `dbname` and `user` must not be empty
    /// - `addr`, when present, must be `host[:port]` with a numeric port
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dbname.is_empty() {
            return Err(ConfigError::validation(
                "postgres.dbname",
                "Database name is required.",
            ));
        }

        if self.user.is_empty() {
            return Err(ConfigError::validation(
                "postgres.user",
                "Database user is required.",
            ));
        }

        self.host_and_port()?;

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.postgres.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
