//! CLI module for users-cli
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Usage validation into typed requests
//! - Command execution and result printing

pub mod executor;
pub mod handlers;
pub mod output;
pub mod parser;
pub mod request;
pub mod validation;

// Re-export public types for convenience
pub use executor::{execute_request, format_error, initialize_schema};
pub use output::CommandOutput;
pub use parser::{Cli, Commands, LogLevel};
pub use request::{UsageError, UserRequest};

use std::process::ExitCode;

use crate::config::{ConfigLoader, settings::Settings};
use crate::error::AppError;
use crate::logger::{LoggerError, init_logger};
use crate::repositories::UserRepository;

/// Exit status for argument-count violations
pub const EXIT_USAGE: u8 = 1;

/// Exit status for configuration and storage failures
pub const EXIT_FATAL: u8 = 2;

/// Run one invocation end to end.
///
/// Order: load config, set up logging, validate the request, connect,
/// execute, print. The connection is dropped before this returns, on every path.
pub async fn run(cli: Cli) -> ExitCode {
    let settings = match ConfigLoader::new(cli.config_path()).load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format_error(AppError::from(e)));
            return ExitCode::from(EXIT_FATAL);
        }
    };

    if let Err(e) = init_logger_from_settings(&settings, cli.log_level_override()) {
        eprintln!("Logger initialization error: {}", e);
        return ExitCode::from(EXIT_FATAL);
    }
    tracing::debug!(version = crate::pkg_version(), config = %cli.config_path().display(), "Starting");

    let request = match UserRequest::from_command(&cli.command) {
        Ok(Some(request)) => request,
        Ok(None) => {
            tracing::debug!(command = ?cli.command, "Unrecognized sub-command ignored");
            return ExitCode::SUCCESS;
        }
        Err(usage) => {
            println!("{}", usage);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut repository = match UserRepository::connect(&settings.postgres).await {
        Ok(repository) => repository,
        Err(e) => {
            eprintln!("{}", format_error(e));
            return ExitCode::from(EXIT_FATAL);
        }
    };

    match execute_request(&mut repository, request).await {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", format_error(e));
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Initialize logger from settings, applying a command-line level override.
///
/// A subscriber that is already installed is left in place.
pub fn init_logger_from_settings(
    settings: &Settings,
    level_override: Option<String>,
) -> Result<(), LoggerError> {
    let mut logger_config = settings
        .logger
        .clone()
        .into_logger_config()
        .map_err(|e| LoggerError::config(e.to_string()))?;

    if let Some(level) = level_override {
        logger_config = logger_config.with_level(level);
    }

    match init_logger(logger_config) {
        Ok(()) | Err(LoggerError::Init { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}
