//! Terminal rendering of command results.

use std::fmt;

use crate::models::User;

/// Header line printed before the user table.
pub const LIST_HEADER: &str = "id | username | email | created_at";

/// Result of one executed request.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    Created(User),
    Deleted(usize),
    Updated(User),
    Listed(Vec<User>),
}

/// One right-aligned table row. Wider values overflow instead of being cut.
pub fn format_user_row(user: &User) -> String {
    format!(
        "{:>3} | {:>8} | {:>15} | {:>20}",
        user.id,
        user.username,
        user.email,
        user.created_at().to_string()
    )
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Created(user) => {
                writeln!(f, "New user with id {} was created successfully", user.id)
            }
            CommandOutput::Deleted(count) => {
                writeln!(f, "{} users were deleted successfully", count)
            }
            CommandOutput::Updated(user) => writeln!(f, "{}", user),
            CommandOutput::Listed(users) => {
                writeln!(f, "{}", LIST_HEADER)?;
                for user in users {
                    writeln!(f, "{}", format_user_row(user))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff_diesel::ToDiesel;
    use proptest::prelude::*;

    fn user(id: i64, username: &str, email: &str) -> User {
        let created_at: jiff::Timestamp = "2024-01-02T03:04:05Z".parse().unwrap();
        User {
            id,
            username: username.to_string(),
            email: email.to_string(),
            created_at: created_at.to_diesel(),
        }
    }

    #[test]
    fn test_created_message() {
        let output = CommandOutput::Created(user(7, "alice", "alice@example.com"));
        assert_eq!(
            output.to_string(),
            "New user with id 7 was created successfully\n"
        );
    }

    #[test]
    fn test_deleted_message() {
        assert_eq!(
            CommandOutput::Deleted(0).to_string(),
            "0 users were deleted successfully\n"
        );
    }

    #[test]
    fn test_updated_message() {
        let output = CommandOutput::Updated(user(1, "alice", "bob@example.com"));
        assert_eq!(
            output.to_string(),
            "User<1 alice bob@example.com 2024-01-02T03:04:05Z>\n"
        );
    }

    #[test]
    fn test_empty_list_prints_header_only() {
        assert_eq!(
            CommandOutput::Listed(vec![]).to_string(),
            "id | username | email | created_at\n"
        );
    }

    #[test]
    fn test_row_is_right_aligned() {
        assert_eq!(
            format_user_row(&user(1, "bob", "b@example.com")),
            "  1 |      bob |   b@example.com | 2024-01-02T03:04:05Z"
        );
    }

    #[test]
    fn test_wide_values_overflow() {
        let row = format_user_row(&user(12345, "a-very-long-username", "someone@a-long-domain.example"));
        assert_eq!(
            row,
            "12345 | a-very-long-username | someone@a-long-domain.example | 2024-01-02T03:04:05Z"
        );
    }

    #[test]
    fn test_list_has_one_line_per_user() {
        let output = CommandOutput::Listed(vec![
            user(1, "alice", "alice@example.com"),
            user(2, "bob", "bob@example.com"),
        ]);
        let rendered = output.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], LIST_HEADER);
        assert!(lines[1].contains("alice@example.com"));
        assert!(lines[2].contains("bob@example.com"));
    }

    proptest! {
        #[test]
        fn prop_row_never_truncates(username in "[a-z]{1,40}", email in "[a-z]{1,30}@[a-z]{1,10}\\.com") {
            let row = format_user_row(&user(1, &username, &email));
            let expected_username = format!(" {} ", username);
            let expected_email = format!(" {} ", email);
            prop_assert!(row.contains(&expected_username));
            prop_assert!(row.contains(&expected_email));
        }
    }
}
