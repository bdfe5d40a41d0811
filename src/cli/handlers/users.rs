//! User command handler
//!
//! Create, delete, update and list operations against a [`UserStore`].

use crate::cli::output::CommandOutput;
use crate::cli::request::UserRequest;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserStore;

/// Handler for the user sub-commands
pub struct UserCommandHandler<'a, S: UserStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: UserStore + ?Sized> UserCommandHandler<'a, S> {
    /// Create a new handler over the given store
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Run one request and return what should be printed.
    pub async fn execute(&mut self, request: UserRequest) -> AppResult<CommandOutput> {
        match request {
            UserRequest::Add { username, email } => {
                self.create(username, email).await.map(CommandOutput::Created)
            }
            UserRequest::Delete { ids } => self.delete(&ids).await.map(CommandOutput::Deleted),
            UserRequest::Update { id, changes } => {
                self.update(&id, changes).await.map(CommandOutput::Updated)
            }
            UserRequest::List => self.list().await.map(CommandOutput::Listed),
        }
    }

    /// Insert a user stamped with the current time.
    pub async fn create(&mut self, username: String, email: String) -> AppResult<User> {
        let user = self.store.create(NewUser::new(username, email)).await?;
        tracing::info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Delete every user whose id is listed. Unknown ids are not an error.
    pub async fn delete(&mut self, ids: &[String]) -> AppResult<usize> {
        let ids = ids
            .iter()
            .map(|raw| parse_id(raw))
            .collect::<AppResult<Vec<i64>>>()?;

        let deleted = self.store.delete_by_ids(&ids).await?;
        tracing::info!(requested = ids.len(), deleted, "Users deleted");
        Ok(deleted)
    }

    /// Apply the supplied fields to one user and return its current state.
    pub async fn update(&mut self, id: &str, changes: UpdateUser) -> AppResult<User> {
        let user_id = parse_id(id)?;
        if changes.is_empty() {
            tracing::debug!(user_id, "No fields supplied; returning current row");
        }

        let user = self.store.update(user_id, changes).await?;
        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// All users in storage order.
    pub async fn list(&mut self) -> AppResult<Vec<User>> {
        let users = self.store.list_all().await?;
        tracing::debug!(count = users.len(), "Users listed");
        Ok(users)
    }
}

/// Parses a command-line id into the table's integer key.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| AppError::Validation {
        field: "id".to_string(),
        reason: format!("'{}' is not a valid integer id", raw),
    })
}
