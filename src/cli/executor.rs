//! Request executor
//!
//! Prepares the schema and dispatches a validated request to its handler.

use super::handlers::UserCommandHandler;
use super::output::CommandOutput;
use super::request::UserRequest;
use crate::db::SchemaStatus;
use crate::error::{AppError, AppResult};
use crate::repositories::UserStore;

/// Ensure the table exists, then run the request.
///
/// # Errors
/// Returns storage errors from the handler. Schema creation never fails the
/// request; see [`initialize_schema`].
pub async fn execute_request<S: UserStore + ?Sized>(
    store: &mut S,
    request: UserRequest,
) -> AppResult<CommandOutput> {
    initialize_schema(store).await;
    UserCommandHandler::new(store).execute(request).await
}

/// Best-effort `CREATE TABLE`.
///
/// An existing table is the normal case. Any other failure is logged and
/// swallowed; if the table is genuinely unusable the request itself fails.
pub async fn initialize_schema<S: UserStore + ?Sized>(store: &mut S) -> Option<SchemaStatus> {
    match store.ensure_schema().await {
        Ok(SchemaStatus::Created) => {
            tracing::info!("Created users table");
            Some(SchemaStatus::Created)
        }
        Ok(SchemaStatus::AlreadyExists) => {
            tracing::debug!("users table already exists");
            Some(SchemaStatus::AlreadyExists)
        }
        Err(e) => {
            tracing::warn!(error = %format_error(e), "Schema initialization failed; continuing");
            None
        }
    }
}

/// Renders an error with its full cause chain.
pub fn format_error(error: AppError) -> String {
    format!("{:#}", anyhow::Error::from(error))
}
