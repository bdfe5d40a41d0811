//! CLI argument parsing with clap
//!
//! Each user sub-command captures its positional values verbatim; the
//! argument-count rules live in [`crate::cli::request`] so the usage text
//! stays under our control.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Manage rows of the `users` table
#[derive(Parser, Debug)]
#[command(name = "users")]
#[command(about = "Manage rows of the users table in PostgreSQL")]
#[command(long_about = "
Create, delete, update and list users stored in a PostgreSQL table.
Connection settings are read from the [postgres] section of an INI file.

EXAMPLES:
    # Add a user
    users users add alice alice@example.com

    # Change the email of user 1
    users users update 1 bob@example.com

    # Change email and username of user 1
    users users update 1 bob@example.com bob

    # Delete users 1 and 2
    users users del 1 2

    # List every user
    users users all

    # Use another configuration file
    users --config /etc/users/db.ini users all
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Resource name, conventionally `users`; accepted and otherwise ignored
    #[arg(value_name = "RESOURCE")]
    pub resource: String,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    ///
    /// INI file holding the [postgres] section (dbname, user, password, addr).
    /// The file must exist and be readable. Defaults to `db.ini` in the
    /// working directory.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level override, wins over --verbose/--quiet and the [logger] section
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

/// User operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a user: add USERNAME EMAIL
    #[command(disable_help_flag = true)]
    Add {
        #[arg(value_name = "ARGS", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete users by id: del ID...
    #[command(disable_help_flag = true)]
    Del {
        #[arg(value_name = "ARGS", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Update a user: update ID [EMAIL [USERNAME]]
    #[command(disable_help_flag = true)]
    Update {
        #[arg(value_name = "ARGS", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List every user
    #[command(disable_help_flag = true)]
    All {
        #[arg(value_name = "ARGS", num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Anything else is accepted and ignored
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// The configuration file to load.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Level requested on the command line, if any.
    pub fn log_level_override(&self) -> Option<String> {
        match (self.log_level, self.verbose, self.quiet) {
            (Some(level), _, _) => Some(level.into()),
            (None, true, _) => Some("debug".to_string()),
            (None, false, true) => Some("error".to_string()),
            (None, false, false) => None,
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "[postgres]\ndbname = app\nuser = app\npassword = secret")
            .expect("Failed to write config file");
        file
    }

    fn parse(config: &NamedTempFile, args: &[&str]) -> Result<Cli, clap::Error> {
        let path = config.path().to_str().unwrap().to_string();
        let mut argv = vec!["users", "--config", path.as_str()];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let err = Cli::try_parse_from(["users", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["users", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_add_command() {
        let config = config_file();
        let cli = parse(&config, &["users", "add", "alice", "alice@example.com"]).unwrap();

        assert_eq!(cli.resource, "users");
        assert_eq!(
            cli.command,
            Commands::Add {
                args: vec!["alice".to_string(), "alice@example.com".to_string()]
            }
        );
    }

    #[test]
    fn test_commands_keep_any_arity() {
        let config = config_file();

        let cli = parse(&config, &["users", "add"]).unwrap();
        assert_eq!(cli.command, Commands::Add { args: vec![] });

        let cli = parse(&config, &["users", "all", "extra", "more"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::All {
                args: vec!["extra".to_string(), "more".to_string()]
            }
        );
    }

    #[test]
    fn test_hyphenated_values_are_kept() {
        let config = config_file();
        let cli = parse(&config, &["users", "add", "-alice-", "a@example.com"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Add {
                args: vec!["-alice-".to_string(), "a@example.com".to_string()]
            }
        );
    }

    #[test]
    fn test_help_lookalikes_are_values() {
        let config = config_file();

        let cli = parse(&config, &["users", "add", "--help", "x@example.com"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Add {
                args: vec!["--help".to_string(), "x@example.com".to_string()]
            }
        );

        let cli = parse(&config, &["users", "del", "-h"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Del {
                args: vec!["-h".to_string()]
            }
        );
    }

    #[test]
    fn test_leading_double_dash_ends_options() {
        let config = config_file();
        let cli = parse(&config, &["users", "del", "--", "1"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Del {
                args: vec!["1".to_string()]
            }
        );
    }

    #[test]
    fn test_unknown_subcommand_is_captured() {
        let config = config_file();
        let cli = parse(&config, &["users", "purge", "1"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Other(vec!["purge".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["users", "users", "all"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.config_path(), PathBuf::from("db.ini"));
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let result = Cli::try_parse_from([
            "users",
            "--config",
            "/definitely/not/here.ini",
            "users",
            "all",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let config = config_file();
        let err = parse(&config, &["--verbose", "--quiet", "users", "all"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_log_level_override() {
        let config = config_file();

        let cli = parse(&config, &["users", "all"]).unwrap();
        assert_eq!(cli.log_level_override(), None);

        let cli = parse(&config, &["-v", "users", "all"]).unwrap();
        assert_eq!(cli.log_level_override().as_deref(), Some("debug"));

        let cli = parse(&config, &["-q", "users", "all"]).unwrap();
        assert_eq!(cli.log_level_override().as_deref(), Some("error"));

        let cli = parse(&config, &["-v", "--log-level", "trace", "users", "all"]).unwrap();
        assert_eq!(cli.log_level_override().as_deref(), Some("trace"));
    }
}
