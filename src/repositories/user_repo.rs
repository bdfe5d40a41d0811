//! User repository for async database operations.
//!
//! Provides CRUD operations for the users table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::config::PostgresSettings;
use crate::db::{SchemaStatus, ensure_users_table, establish_connection};
use crate::error::{AppError, AppResult, DatabaseErrorConverter};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserStore;

/// User repository owning the invocation's single connection.
///
/// Dropping the repository closes the connection.
pub struct UserRepository {
    conn: AsyncPgConnection,
}

impl UserRepository {
    /// Wraps an already established connection.
    pub fn new(conn: AsyncPgConnection) -> Self {
        Self { conn }
    }

    /// Connects using the `[postgres]` settings.
    pub async fn connect(settings: &PostgresSettings) -> AppResult<Self> {
        let conn = establish_connection(settings).await?;
        Ok(Self::new(conn))
    }

    async fn find_by_id(&mut self, user_id: i64) -> AppResult<Option<User>> {
        use crate::schema::users::dsl::*;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut self.conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "find user"))
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn ensure_schema(&mut self) -> AppResult<SchemaStatus> {
        ensure_users_table(&mut self.conn).await
    }

    async fn create(&mut self, new_user: NewUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut self.conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "insert user"))
    }

    async fn delete_by_ids(&mut self, ids: &[i64]) -> AppResult<usize> {
        use crate::schema::users::dsl::*;

        diesel::delete(users.filter(id.eq_any(ids.to_vec())))
            .execute(&mut self.conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "delete users"))
    }

    async fn update(&mut self, user_id: i64, changes: UpdateUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;

        // Diesel refuses an empty SET clause
        if changes.is_empty() {
            return self
                .find_by_id(user_id)
                .await?
                .ok_or_else(|| AppError::user_not_found(user_id));
        }

        diesel::update(users.filter(id.eq(user_id)))
            .set(&changes)
            .returning(User::as_returning())
            .get_result(&mut self.conn)
            .await
            .optional()
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "update user"))?
            .ok_or_else(|| AppError::user_not_found(user_id))
    }

    async fn list_all(&mut self) -> AppResult<Vec<User>> {
        use crate::schema::users::dsl::*;

        users
            .select(User::as_select())
            .load(&mut self.conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, "list users"))
    }
}
