//! Configuration management module for users-cli
//!
//! Settings come from a single INI file (`db.ini` by default):
//!
//! ```ini
//! [postgres]
//! dbname = app
//! user = app
//! password = secret
//! addr = localhost:5432   ; optional
//!
//! [logger]                ; optional
//! level = info
//! colored = true
//! format = compact
//! ```
//!
//! `;` and `#` start a comment at the beginning of a line or after
//! whitespace. Quote a value to keep such text in it (`password = "a ;b"`).

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use settings::{LoggerSettings, PostgresSettings, Settings};
