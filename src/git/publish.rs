//! Commit-and-push publishing
//!
//! Puts the working directory on the target branch, stages everything,
//! commits with the resolved identity as author and committer, and pushes
//! the branch to the remote. There is no force push and no retry; a rejected
//! push is returned to the caller.
//!
//! ## Branch selection
//!
//! If the working directory is already on the target branch nothing is
//! switched. Otherwise an existing local branch is checked out, and a missing
//! one is created at HEAD first.

use super::common::Logger;
use super::types::{AuthorInfo, GitCredentials, resolve_signature};
use super::{SystemGit, VersionControl};
use crate::constants::git::{BRANCH_REF_PREFIX, DEFAULT_PUBLISH_BRANCH, DEFAULT_REMOTE};
use crate::error::Result;
use std::path::PathBuf;

/// Inputs for [`commit_and_push_branch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    pub dir: PathBuf,
    pub remote: String,
    pub commit_message: String,
    pub author: Option<AuthorInfo>,
    pub branch: String,
}

impl PublishOptions {
    /// Options with the default remote (`origin`), branch (`scaffolder`) and identity
    pub fn new(dir: impl Into<PathBuf>, commit_message: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            remote: DEFAULT_REMOTE.to_string(),
            commit_message: commit_message.into(),
            author: None,
            branch: DEFAULT_PUBLISH_BRANCH.to_string(),
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_author(mut self, author: AuthorInfo) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Ref updated on the remote
    pub fn remote_ref(&self) -> String {
        format!("{}{}", BRANCH_REF_PREFIX, self.branch)
    }
}

/// Commit all changes in `dir` to `branch` and push it to `remote`
pub async fn commit_and_push_branch(
    git: &dyn VersionControl,
    options: &PublishOptions,
) -> Result<()> {
    let logger = Logger::for_dir(&options.dir);
    let signature = resolve_signature(options.author.as_ref());
    let dir = options.dir.as_path();

    let current = git.current_branch(dir).await?;
    if current.is_none() {
        logger.warn("HEAD is detached, the new commit will start from it");
    }
    if current.as_deref() != Some(options.branch.as_str()) {
        if git.branch_exists(dir, &options.branch).await? {
            logger.info(&format!("Switching to existing branch '{}'", options.branch));
        } else {
            logger.info(&format!("Creating branch '{}'", options.branch));
            git.branch(dir, &options.branch).await?;
        }
        git.checkout(dir, &options.branch).await?;
    }

    git.add(dir, ".").await?;

    git.commit(dir, &options.commit_message, &signature, &signature)
        .await?;

    git.push(dir, &options.remote, &options.remote_ref()).await?;

    logger.success(&format!(
        "Pushed '{}' to {} as {} <{}>",
        options.branch, options.remote, signature.name, signature.email
    ));
    Ok(())
}

/// [`commit_and_push_branch`] against the system git, authenticated with `credentials`
pub async fn commit_and_push_branch_with_auth(
    credentials: &GitCredentials,
    options: &PublishOptions,
) -> Result<()> {
    let git = SystemGit::from_auth(credentials.clone());
    commit_and_push_branch(&git, options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PublishOptions::new("/tmp/x", "Initial scaffold");
        assert_eq!(options.remote, "origin");
        assert_eq!(options.branch, "scaffolder");
        assert!(options.author.is_none());
    }

    #[test]
    fn test_remote_ref_is_fully_qualified() {
        let options = PublishOptions::new("/tmp/x", "msg").with_branch("feature/scaffold");
        assert_eq!(options.remote_ref(), "refs/heads/feature/scaffold");
    }
}
