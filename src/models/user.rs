use std::fmt;

use diesel::prelude::*;
use jiff_diesel::{Timestamp, ToDiesel};

/// User model for reading from database
/// Derives Queryable for SELECT operations and Selectable for type-safe column selection
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl User {
    /// Creation instant as a `jiff` timestamp.
    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at.to_jiff()
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User<{} {} {} {}>",
            self.id,
            self.username,
            self.email,
            self.created_at()
        )
    }
}

/// NewUser model for inserting new records
/// Derives Insertable for INSERT operations; `id` is assigned by the database
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl NewUser {
    /// Builds a row stamped with the current instant.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            created_at: jiff::Timestamp::now().to_diesel(),
        }
    }
}

/// UpdateUser model for partial updates
/// Derives AsChangeset for UPDATE operations with optional fields.
/// Field order is the SET order: email first, then username.
#[derive(Debug, AsChangeset, Clone, Default, PartialEq, Eq)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
}

impl UpdateUser {
    /// Maps trailing positional values onto fields: the first is the email,
    /// the second the username. Anything beyond that is ignored.
    pub fn from_positional(values: &[String]) -> Self {
        Self {
            email: values.first().cloned(),
            username: values.get(1).cloned(),
        }
    }

    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none()
    }
}
