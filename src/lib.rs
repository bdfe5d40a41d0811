//! users-cli Library
//!
//! Manage rows of a PostgreSQL `users` table from the command line.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
