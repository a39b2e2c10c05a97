//! Configuration validation utilities
//!
//! All rules run and every violation is collected, so a user fixing a
//! config file sees the complete list at once.

use super::PublishConfig;
use anyhow::anyhow;
use regex::Regex;
use std::sync::LazyLock;

/// Azure DevOps organization names: alphanumeric start, then letters,
/// digits, `-`, `_` or `.`
const ORGANIZATION_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9_.-]*$";

static ORGANIZATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ORGANIZATION_PATTERN).expect("organization pattern is a valid regex")
});

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Repository URL is empty
    EmptyRepositoryUrl,
    /// Repository URL format is invalid
    InvalidRepositoryUrl(String),
    /// Working directory is empty
    EmptyWorkingDirectory,
    /// Remote name is empty
    EmptyRemoteName,
    /// Branch name is empty or not a valid git branch name
    InvalidBranchName { field: &'static str, value: String },
    /// Commit message is empty
    EmptyCommitMessage,
    /// Organization name is empty or malformed
    InvalidOrganization(String),
    /// Pull request repository id is empty
    EmptyRepositoryId,
    /// Pull request title is empty
    EmptyPullRequestTitle,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRepositoryUrl => {
                write!(f, "Repository URL cannot be empty")
            }
            ValidationError::InvalidRepositoryUrl(url) => {
                write!(f, "Repository has invalid URL: '{}'", url)
            }
            ValidationError::EmptyWorkingDirectory => {
                write!(f, "Working directory cannot be empty")
            }
            ValidationError::EmptyRemoteName => {
                write!(f, "Remote name cannot be empty")
            }
            ValidationError::InvalidBranchName { field, value } => {
                write!(f, "Invalid branch name for {}: '{}'", field, value)
            }
            ValidationError::EmptyCommitMessage => {
                write!(f, "Commit message cannot be empty")
            }
            ValidationError::InvalidOrganization(org) => {
                write!(f, "Invalid Azure DevOps organization name: '{}'", org)
            }
            ValidationError::EmptyRepositoryId => {
                write!(f, "Pull request repository_id cannot be empty")
            }
            ValidationError::EmptyPullRequestTitle => {
                write!(f, "Pull request title cannot be empty")
            }
        }
    }
}

/// Validates a complete configuration object
pub fn validate_config(config: &PublishConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let repository = &config.repository;

    if repository.url.trim().is_empty() {
        errors.push(ValidationError::EmptyRepositoryUrl);
    } else if !is_valid_repository_url(&repository.url) {
        errors.push(ValidationError::InvalidRepositoryUrl(repository.url.clone()));
    }

    if repository.dir.as_os_str().is_empty() {
        errors.push(ValidationError::EmptyWorkingDirectory);
    }

    if repository.remote.trim().is_empty() {
        errors.push(ValidationError::EmptyRemoteName);
    }

    if !is_valid_branch_name(&repository.branch) {
        errors.push(ValidationError::InvalidBranchName {
            field: "repository.branch",
            value: repository.branch.clone(),
        });
    }

    if let Some(publish) = &config.publish {
        if !is_valid_branch_name(&publish.branch) {
            errors.push(ValidationError::InvalidBranchName {
                field: "publish.branch",
                value: publish.branch.clone(),
            });
        }
        if publish.commit_message.trim().is_empty() {
            errors.push(ValidationError::EmptyCommitMessage);
        }
    }

    if let Some(pr) = &config.pull_request {
        if !is_valid_organization(&pr.organization) {
            errors.push(ValidationError::InvalidOrganization(pr.organization.clone()));
        }
        if pr.repository_id.trim().is_empty() {
            errors.push(ValidationError::EmptyRepositoryId);
        }
        if pr.title.trim().is_empty() {
            errors.push(ValidationError::EmptyPullRequestTitle);
        }
        if let Some(target) = &pr.target_branch
            && !is_valid_branch_name(target)
        {
            errors.push(ValidationError::InvalidBranchName {
                field: "pull_request.target_branch",
                value: target.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks if a repository URL has a supported scheme
pub fn is_valid_repository_url(url: &str) -> bool {
    url.starts_with("git@")
        || url.starts_with("https://")
        || url.starts_with("http://")
        || url.starts_with("file://")
}

/// Basic git branch name rules
pub fn is_valid_branch_name(name: &str) -> bool {
    !name.trim().is_empty()
        && !name.starts_with('-')
        && !name.ends_with('.')
        && !name.contains("..")
        && !name.contains(char::is_whitespace)
}

pub fn is_valid_organization(org: &str) -> bool {
    ORGANIZATION_REGEX.is_match(org)
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
