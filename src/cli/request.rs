//! Typed requests built from raw sub-command arguments.
//!
//! [`UserRequest::from_command`] is a pure function: it either yields a
//! request, reports the usage line for the sub-command, or signals that the
//! sub-command is not ours and nothing should happen.

use thiserror::Error;

use super::parser::Commands;
use crate::models::UpdateUser;

/// Most trailing fields `update` accepts after the id (email, username).
const MAX_UPDATE_FIELDS: usize = 2;

/// A validated user operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRequest {
    Add { username: String, email: String },
    Delete { ids: Vec<String> },
    Update { id: String, changes: UpdateUser },
    List,
}

/// Wrong number of arguments for a sub-command; displays as its usage line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Usage: users add USERNAME EMAIL")]
    Add,
    #[error("Usage: users del ID...")]
    Delete,
    #[error("Usage: users update ID EMAIL USERNAME")]
    Update,
    #[error("Usage: users all")]
    List,
}

impl UserRequest {
    /// Validates argument counts and builds the request.
    ///
    /// Returns `Ok(None)` for sub-commands this tool does not know.
    pub fn from_command(command: &Commands) -> Result<Option<Self>, UsageError> {
        let request = match command {
            Commands::Add { args } => match args.as_slice() {
                [username, email] => UserRequest::Add {
                    username: username.clone(),
                    email: email.clone(),
                },
                _ => return Err(UsageError::Add),
            },
            Commands::Del { args } => {
                if args.is_empty() {
                    return Err(UsageError::Delete);
                }
                UserRequest::Delete { ids: args.clone() }
            }
            Commands::Update { args } => match args.split_first() {
                Some((id, fields)) if fields.len() <= MAX_UPDATE_FIELDS => UserRequest::Update {
                    id: id.clone(),
                    changes: UpdateUser::from_positional(fields),
                },
                _ => return Err(UsageError::Update),
            },
            Commands::All { args } => {
                if !args.is_empty() {
                    return Err(UsageError::List);
                }
                UserRequest::List
            }
            Commands::Other(_) => return Ok(None),
        };

        Ok(Some(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_add_request() {
        let command = Commands::Add {
            args: strings(&["alice", "alice@example.com"]),
        };
        assert_eq!(
            UserRequest::from_command(&command),
            Ok(Some(UserRequest::Add {
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
            }))
        );
    }

    #[test]
    fn test_add_values_taken_verbatim() {
        let command = Commands::Add {
            args: strings(&["  alice ", "not-an-email"]),
        };
        match UserRequest::from_command(&command) {
            Ok(Some(UserRequest::Add { username, email })) => {
                assert_eq!(username, "  alice ");
                assert_eq!(email, "not-an-email");
            }
            other => panic!("Expected Add request, got: {:?}", other),
        }
    }

    #[test]
    fn test_add_wrong_count() {
        for args in [strings(&[]), strings(&["alice"]), strings(&["a", "b", "c"])] {
            assert_eq!(
                UserRequest::from_command(&Commands::Add { args }),
                Err(UsageError::Add)
            );
        }
    }

    #[test]
    fn test_del_requires_an_id() {
        assert_eq!(
            UserRequest::from_command(&Commands::Del { args: vec![] }),
            Err(UsageError::Delete)
        );
        assert_eq!(
            UserRequest::from_command(&Commands::Del {
                args: strings(&["1", "2", "3"])
            }),
            Ok(Some(UserRequest::Delete {
                ids: strings(&["1", "2", "3"])
            }))
        );
    }

    #[test]
    fn test_update_field_order() {
        let request = UserRequest::from_command(&Commands::Update {
            args: strings(&["1", "bob@example.com", "bob"]),
        });
        assert_eq!(
            request,
            Ok(Some(UserRequest::Update {
                id: "1".to_string(),
                changes: UpdateUser {
                    email: Some("bob@example.com".to_string()),
                    username: Some("bob".to_string()),
                },
            }))
        );
    }

    #[test]
    fn test_update_without_fields() {
        let request = UserRequest::from_command(&Commands::Update {
            args: strings(&["1"]),
        });
        assert_eq!(
            request,
            Ok(Some(UserRequest::Update {
                id: "1".to_string(),
                changes: UpdateUser::default(),
            }))
        );
    }

    #[test]
    fn test_update_wrong_count() {
        for args in [strings(&[]), strings(&["1", "a@example.com", "a", "extra"])] {
            assert_eq!(
                UserRequest::from_command(&Commands::Update { args }),
                Err(UsageError::Update)
            );
        }
    }

    #[test]
    fn test_all_takes_no_arguments() {
        assert_eq!(
            UserRequest::from_command(&Commands::All { args: vec![] }),
            Ok(Some(UserRequest::List))
        );
        assert_eq!(
            UserRequest::from_command(&Commands::All {
                args: strings(&["extra"])
            }),
            Err(UsageError::List)
        );
    }

    #[test]
    fn test_unknown_command_is_ignored() {
        let command = Commands::Other(strings(&["purge", "everything"]));
        assert_eq!(UserRequest::from_command(&command), Ok(None));
    }

    #[test]
    fn test_usage_messages() {
        assert_eq!(UsageError::Add.to_string(), "Usage: users add USERNAME EMAIL");
        assert_eq!(UsageError::Delete.to_string(), "Usage: users del ID...");
        assert_eq!(
            UsageError::Update.to_string(),
            "Usage: users update ID EMAIL USERNAME"
        );
        assert_eq!(UsageError::List.to_string(), "Usage: users all");
    }

    proptest! {
        #[test]
        fn prop_add_accepts_only_two(args in proptest::collection::vec(".*", 0..6)) {
            let result = UserRequest::from_command(&Commands::Add { args: args.clone() });
            prop_assert_eq!(result.is_ok(), args.len() == 2);
        }

        #[test]
        fn prop_update_accepts_one_to_three(args in proptest::collection::vec(".*", 0..7)) {
            let result = UserRequest::from_command(&Commands::Update { args: args.clone() });
            prop_assert_eq!(result.is_ok(), (1..=3).contains(&args.len()));
        }

        #[test]
        fn prop_del_keeps_every_id(args in proptest::collection::vec("[0-9]{1,6}", 1..10)) {
            let result = UserRequest::from_command(&Commands::Del { args: args.clone() });
            prop_assert_eq!(result, Ok(Some(UserRequest::Delete { ids: args })));
        }
    }
}
