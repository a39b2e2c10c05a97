//! Command argument validation utilities
//!
//! This module validates command arguments after clap parsing and resolves
//! credentials from flags or their environment variable fallbacks. The
//! library itself never reads the environment; this is the only place that
//! does.

use crate::constants::env::{ADO_TOKEN, GIT_PASSWORD, GIT_TOKEN, GIT_USERNAME};
use crate::git::GitCredentials;
use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Mutually exclusive arguments were both provided
    MutualExclusivity { first: String, second: String },
    /// Required argument was not provided
    MissingRequired {
        argument: String,
        alternatives: Vec<String>,
    },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::MutualExclusivity { first, second } => {
                write!(f, "Cannot specify both {} and {}", first, second)
            }
            CommandValidationError::MissingRequired {
                argument,
                alternatives,
            } => {
                if alternatives.is_empty() {
                    write!(f, "{} is required", argument)
                } else {
                    write!(
                        f,
                        "Either {} or {} must be provided",
                        alternatives.join(", "),
                        argument
                    )
                }
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn flag_or_env(flag: Option<String>, var: &str) -> Option<String> {
    non_empty(flag).or_else(|| non_empty(std::env::var(var).ok()))
}

/// Resolve git credentials from flags, falling back to `GIT_TOKEN` or
/// `GIT_USERNAME`/`GIT_PASSWORD`
///
/// Returns `None` when nothing is configured; the remote is then accessed
/// without explicit credentials (SSH, `file://`, credential helpers).
pub fn resolve_git_credentials(
    token: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Result<Option<GitCredentials>> {
    let token = non_empty(token);
    let username = non_empty(username);
    let password = non_empty(password);

    if token.is_some() && (username.is_some() || password.is_some()) {
        return Err(validation_error_to_anyhow(
            CommandValidationError::MutualExclusivity {
                first: "--token".to_string(),
                second: "--username/--password".to_string(),
            },
        ));
    }

    if let Some(token) = token {
        return Ok(Some(GitCredentials::token(token)));
    }

    let username = username.or_else(|| non_empty(std::env::var(GIT_USERNAME).ok()));
    let password = password.or_else(|| non_empty(std::env::var(GIT_PASSWORD).ok()));

    match (username, password) {
        (Some(username), Some(password)) => {
            Ok(Some(GitCredentials::username_password(username, password)))
        }
        (Some(_), None) => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "a password".to_string(),
                alternatives: vec![
                    "--password".to_string(),
                    format!("{} environment variable", GIT_PASSWORD),
                ],
            },
        )),
        (None, Some(_)) => Err(validation_error_to_anyhow(
            CommandValidationError::MissingRequired {
                argument: "a username".to_string(),
                alternatives: vec![
                    "--username".to_string(),
                    format!("{} environment variable", GIT_USERNAME),
                ],
            },
        )),
        (None, None) => Ok(flag_or_env(None, GIT_TOKEN).map(GitCredentials::token)),
    }
}

/// Resolve the Azure DevOps personal access token
pub fn resolve_ado_token(token: Option<String>) -> Option<String> {
    flag_or_env(token, ADO_TOKEN)
}

/// Require an Azure DevOps personal access token
pub fn require_ado_token(token: Option<&str>) -> Result<&str> {
    token.ok_or_else(|| {
        validation_error_to_anyhow(CommandValidationError::MissingRequired {
            argument: "an Azure DevOps token".to_string(),
            alternatives: vec![
                "--ado-token".to_string(),
                format!("{} environment variable", ADO_TOKEN),
            ],
        })
    })
}

/// Validate a branch name override
pub fn validate_branch_name(branch: &Option<String>) -> Result<()> {
    if let Some(name) = branch
        && !crate::config::validation::is_valid_branch_name(name)
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "branch".to_string(),
                value: name.clone(),
                reason: "invalid Git branch name format".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a commit message override
///
/// Ensures commit messages are not empty when provided
pub fn validate_commit_message(message: &Option<String>) -> Result<()> {
    if let Some(msg) = message
        && msg.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "commit message".to_string(),
                value: msg.clone(),
                reason: "commit message cannot be empty or whitespace only".to_string(),
            },
        ));
    }
    Ok(())
}
