//! Repository layer for data access operations.
//!
//! [`UserStore`] is the seam between the command handlers and storage:
//! [`UserRepository`] talks to PostgreSQL, [`InMemoryUserStore`] keeps rows in
//! process memory.

mod memory;
mod user_repo;

pub use memory::InMemoryUserStore;
pub use user_repo::UserRepository;

use async_trait::async_trait;

use crate::db::SchemaStatus;
use crate::error::AppResult;
use crate::models::{NewUser, UpdateUser, User};

/// Storage operations on the `users` table.
///
/// Uniqueness of `username` and `email` is enforced by the implementation;
/// violations come back as `AppError::Duplicate`.
#[async_trait]
pub trait UserStore: Send {
    /// Creates the table if it is missing.
    async fn ensure_schema(&mut self) -> AppResult<SchemaStatus>;

    /// Inserts a row and returns it with its assigned id.
    async fn create(&mut self, new_user: NewUser) -> AppResult<User>;

    /// Deletes every row whose id is in `ids`, returning how many went.
    async fn delete_by_ids(&mut self, ids: &[i64]) -> AppResult<usize>;

    /// Applies `changes` to one row and returns the row as stored afterwards.
    ///
    /// An empty changeset writes nothing and returns the current row.
    /// A missing id is `AppError::NotFound`.
    async fn update(&mut self, user_id: i64, changes: UpdateUser) -> AppResult<User>;

    /// Every row, in storage order.
    async fn list_all(&mut self) -> AppResult<Vec<User>>;
}
