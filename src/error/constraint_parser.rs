use std::sync::OnceLock;

use regex::Regex;

/// Utility for parsing PostgreSQL error messages.
///
/// Extracts structured information from unique constraint violations and
/// from "relation already exists" failures, with compiled patterns cached
/// for the life of the process.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    table_name: Regex,
    relation_exists: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" pattern in PostgreSQL messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
            // Matches `relation "users" already exists`
            relation_exists: Regex::new(r#"relation "([^"]+)" already exists"#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation into `(entity, field, value)`.
    ///
    /// Postgres puts the offending key in the DETAIL part of the error, so
    /// `details` is searched before `message`.
    ///
    /// # Examples
    /// ```
    /// use users_cli::error::ConstraintParser;
    ///
    /// let result = ConstraintParser::parse_unique_violation(
    ///     "duplicate key value violates unique constraint \"users_email_key\"",
    ///     Some("Key (email)=(alice@example.com) already exists."),
    ///     Some("users_email_key"),
    /// );
    /// assert_eq!(
    ///     result,
    ///     Some(("users".to_string(), "email".to_string(), "alice@example.com".to_string()))
    /// );
    /// ```
    pub fn parse_unique_violation(
        message: &str,
        details: Option<&str>,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = details
            .and_then(Self::extract_key_value_from_message)
            .or_else(|| Self::extract_key_value_from_message(message));

        // Try to parse from constraint name first (e.g., "users_email_key")
        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = key_value
                .map(|(_, value)| value)
                .unwrap_or_else(|| "duplicate_value".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = key_value?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Returns the relation name from a `relation "x" already exists` message.
    ///
    /// Matches the English server text only. With a non-English `lc_messages`
    /// the message is not recognised and the caller sees a plain database error.
    pub fn parse_relation_already_exists(message: &str) -> Option<String> {
        Self::patterns()
            .relation_exists
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Parses a constraint name to extract entity and field information.
    ///
    /// Handles the default PostgreSQL naming pattern `{table}_{column}_{suffix}`:
    /// - "users_email_key" -> ("users", "email")
    /// - "users_username_key" -> ("users", "username")
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = constraint_name.split('_').collect();
        if parts.len() >= 3 {
            return Some((parts[0].to_string(), parts[1].to_string()));
        }
        None
    }

    /// Extracts a table name from a database error message.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts `(field, value)` from a "Key (field)=(value)" fragment.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}
