//! Database connection module.
//!
//! Provides a single async PostgreSQL connection per invocation and the
//! best-effort creation of the `users` table.

mod bootstrap;
mod connection;

pub use bootstrap::{CREATE_USERS_TABLE, SchemaStatus, ensure_users_table};
pub use connection::establish_connection;
