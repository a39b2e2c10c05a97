//! Repository cloning
//!
//! Clones a remote into a working directory, registers the remote under the
//! requested name and checks out the requested branch. The three steps run
//! strictly in order and the first failure is returned unchanged; a failed
//! clone may leave a partially populated directory behind.

use super::common::Logger;
use super::types::GitCredentials;
use super::{SystemGit, VersionControl};
use crate::constants::git::{DEFAULT_CLONE_BRANCH, DEFAULT_REMOTE};
use crate::error::Result;
use std::path::PathBuf;

/// Inputs for [`clone_repo`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOptions {
    pub dir: PathBuf,
    pub remote_url: String,
    pub remote: String,
    pub branch: String,
}

impl CloneOptions {
    /// Options with the default remote (`origin`) and branch (`main`)
    pub fn new(dir: impl Into<PathBuf>, remote_url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            remote_url: remote_url.into(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_CLONE_BRANCH.to_string(),
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }
}

/// Clone `remote_url` into `dir`, add the remote, then check out `branch`
pub async fn clone_repo(git: &dyn VersionControl, options: &CloneOptions) -> Result<()> {
    let logger = Logger::for_dir(&options.dir);
    logger.info(&format!("Cloning {}", options.remote_url));

    git.clone_repository(&options.remote_url, &options.dir)
        .await?;

    git.add_remote(&options.dir, &options.remote, &options.remote_url)
        .await?;

    git.checkout(&options.dir, &options.branch).await?;

    logger.success(&format!("Cloned and checked out '{}'", options.branch));
    Ok(())
}

/// [`clone_repo`] against the system git, authenticated with `credentials`
pub async fn clone_repo_with_auth(
    credentials: &GitCredentials,
    options: &CloneOptions,
) -> Result<()> {
    let git = SystemGit::from_auth(credentials.clone());
    clone_repo(&git, options).await
}
