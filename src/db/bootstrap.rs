//! Best-effort creation of the `users` table.

use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::error::{AppError, AppResult, DatabaseErrorConverter};

/// DDL for the `users` table; uniqueness of username and email lives here.
pub const CREATE_USERS_TABLE: &str = "CREATE TABLE users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL
)";

/// Outcome of a successful schema check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The table was created by this invocation
    Created,
    /// The table was already there
    AlreadyExists,
}

/// Issues `CREATE TABLE users`.
///
/// A "relation already exists" failure maps to `SchemaStatus::AlreadyExists`;
/// every other failure is returned to the caller.
pub async fn ensure_users_table(conn: &mut AsyncPgConnection) -> AppResult<SchemaStatus> {
    let result = diesel::sql_query(CREATE_USERS_TABLE).execute(conn).await;

    match result {
        Ok(_) => Ok(SchemaStatus::Created),
        Err(e) => match DatabaseErrorConverter::convert_diesel_error(e, "create users table") {
            AppError::RelationExists { .. } => Ok(SchemaStatus::AlreadyExists),
            other => Err(other),
        },
    }
}
