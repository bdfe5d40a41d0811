//! Async connection setup.

use diesel_async::{AsyncConnection, AsyncPgConnection};

use crate::config::PostgresSettings;
use crate::error::AppError;

/// Opens one connection to the configured database.
///
/// The connection closes when the returned value is dropped.
///
/// # Errors
///
/// - `AppError::Configuration` - if `addr` cannot be turned into host and port
/// - `AppError::Database` - if the server is unreachable or rejects the login
pub async fn establish_connection(
    settings: &PostgresSettings,
) -> Result<AsyncPgConnection, AppError> {
    let connection_string = settings.connection_string()?;

    tracing::debug!(
        addr = %settings.addr(),
        dbname = %settings.dbname,
        user = %settings.user,
        "Connecting to database"
    );

    let conn = AsyncPgConnection::establish(&connection_string).await?;

    tracing::info!(addr = %settings.addr(), dbname = %settings.dbname, "Database connected");
    Ok(conn)
}
