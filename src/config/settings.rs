//! Configuration settings structures for users-cli
//!
//! This module defines the structures deserialized from the INI file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};

/// Address used when `addr` is missing or empty.
pub const DEFAULT_ADDR: &str = "localhost:5432";

const DEFAULT_PORT: u16 = 5432;

// ============================================================================
// Default value functions
// ============================================================================

fn default_addr() -> String {
    DEFAULT_ADDR.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "compact".to_string()
}

// ============================================================================
// Postgres Configuration
// ============================================================================

/// `[postgres]` section: connection parameters
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresSettings {
    /// Database name
    pub dbname: String,

    /// Role to connect as
    pub user: String,

    /// Password for `user`
    pub password: String,

    /// `host:port` of the server
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl PostgresSettings {
    /// The configured address, falling back to `localhost:5432` when empty.
    pub fn addr(&self) -> &str {
        if self.addr.is_empty() {
            DEFAULT_ADDR
        } else {
            &self.addr
        }
    }

    /// Splits `addr` into host and port.
    ///
    /// Accepts `host`, `host:port` and `[v6addr]:port`. A missing port means 5432.
    pub fn host_and_port(&self) -> Result<(String, u16), ConfigError> {
        let addr = self.addr();

        let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
            match rest.split_once(']') {
                Some((host, "")) => (host, None),
                Some((host, tail)) => match tail.strip_prefix(':') {
                    Some(port) => (host, Some(port)),
                    None => return Err(invalid_addr(addr)),
                },
                None => return Err(invalid_addr(addr)),
            }
        } else {
            match addr.rsplit_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (addr, None),
            }
        };

        if host.is_empty() {
            return Err(invalid_addr(addr));
        }

        let port = match port {
            Some(port) => port.parse::<u16>().map_err(|_| invalid_addr(addr))?,
            None => DEFAULT_PORT,
        };

        Ok((host.to_string(), port))
    }

    /// Builds a libpq-style `key=value` connection string.
    pub fn connection_string(&self) -> Result<String, ConfigError> {
        let (host, port) = self.host_and_port()?;
        Ok(format!(
            "host={} port={} user={} password={} dbname={}",
            quote_value(&host),
            port,
            quote_value(&self.user),
            quote_value(&self.password),
            quote_value(&self.dbname),
        ))
    }
}

// Password stays out of logs and panic messages.
impl fmt::Debug for PostgresSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresSettings")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"***")
            .field("addr", &self.addr)
            .finish()
    }
}

fn invalid_addr(addr: &str) -> ConfigError {
    ConfigError::ValidationError {
        field: "postgres.addr".to_string(),
        message: format!("Invalid address '{}'. Expected host:port", addr),
    }
}

fn quote_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

// ============================================================================
// Logger Settings
// ============================================================================

/// `[logger]` section, compatible with the runtime `LoggerConfig`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            colored: default_true(),
            format: default_log_format(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })?;

        LoggerConfig::new(self.level, self.colored, format).map_err(|e| {
            ConfigError::ValidationError {
                field: "logger".to_string(),
                message: e.to_string(),
            }
        })
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Database connection configuration
    pub postgres: PostgresSettings,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
