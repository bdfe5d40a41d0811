//! In-process user store backed by a `BTreeMap`.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::db::SchemaStatus;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserStore;

/// Keeps users in memory with the same id, uniqueness and not-found
/// behaviour as the `users` table.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    rows: BTreeMap<i64, User>,
    last_id: i64,
    schema_created: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, user_id: i64) -> Option<&User> {
        self.rows.get(&user_id)
    }

    fn check_unique(&self, field: &str, value: &str, except: Option<i64>) -> AppResult<()> {
        let taken = self.rows.values().any(|user| {
            Some(user.id) != except
                && match field {
                    "username" => user.username == value,
                    _ => user.email == value,
                }
        });

        if taken {
            return Err(AppError::Duplicate {
                entity: "users".to_string(),
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn ensure_schema(&mut self) -> AppResult<SchemaStatus> {
        if self.schema_created {
            return Ok(SchemaStatus::AlreadyExists);
        }
        self.schema_created = true;
        Ok(SchemaStatus::Created)
    }

    async fn create(&mut self, new_user: NewUser) -> AppResult<User> {
        self.check_unique("username", &new_user.username, None)?;
        self.check_unique("email", &new_user.email, None)?;

        self.last_id += 1;
        let user = User {
            id: self.last_id,
            username: new_user.username,
            email: new_user.email,
            created_at: new_user.created_at,
        };
        self.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_ids(&mut self, ids: &[i64]) -> AppResult<usize> {
        let before = self.rows.len();
        self.rows.retain(|user_id, _| !ids.contains(user_id));
        Ok(before - self.rows.len())
    }

    async fn update(&mut self, user_id: i64, changes: UpdateUser) -> AppResult<User> {
        if !self.rows.contains_key(&user_id) {
            return Err(AppError::user_not_found(user_id));
        }
        if let Some(email) = &changes.email {
            self.check_unique("email", email, Some(user_id))?;
        }
        if let Some(username) = &changes.username {
            self.check_unique("username", username, Some(user_id))?;
        }

        let user = self
            .rows
            .get_mut(&user_id)
            .ok_or_else(|| AppError::user_not_found(user_id))?;
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(username) = changes.username {
            user.username = username;
        }
        Ok(user.clone())
    }

    async fn list_all(&mut self) -> AppResult<Vec<User>> {
        Ok(self.rows.values().cloned().collect())
    }
}
