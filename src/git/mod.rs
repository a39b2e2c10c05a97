//! Git operations for publishing generated content
//!
//! This module is organized into sub-modules for the two git workflows of a
//! scaffolding step, plus the backend they run against:
//!
//! ## Sub-modules
//!
//! - [`clone`]: Clone a remote, register the remote and check out a branch
//!   - `clone_repo()` / `clone_repo_with_auth()`
//!
//! - [`publish`]: Commit everything in a working directory and push it
//!   - `commit_and_push_branch()` / `commit_and_push_branch_with_auth()`
//!
//! - [`system`]: [`VersionControl`] backed by the system `git` executable
//!
//! - [`types`]: Credentials and author identity
//!
//! - [`common`]: Shared utilities
//!   - `Logger` - Consistent logging for git operations
//!
//! Both workflows take a `&dyn VersionControl`, so they can be driven by
//! [`SystemGit`] in production and by a recording fake in tests.

pub mod clone;
pub mod common;
pub mod publish;
pub mod system;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub use clone::{CloneOptions, clone_repo, clone_repo_with_auth};
pub use common::Logger;
pub use publish::{PublishOptions, commit_and_push_branch, commit_and_push_branch_with_auth};
pub use system::SystemGit;
pub use types::{AuthorInfo, GitCredentials, Signature, resolve_signature};

/// The version-control primitives the publishing workflows are built from
///
/// Every call returns only once the operation has completed or failed.
#[async_trait]
pub trait VersionControl: Send + Sync {
    /// Clone `url` into `dir`
    async fn clone_repository(&self, url: &str, dir: &Path) -> Result<()>;

    /// Register `remote` as pointing at `url`
    async fn add_remote(&self, dir: &Path, remote: &str, url: &str) -> Result<()>;

    /// Check out `reference`
    async fn checkout(&self, dir: &Path, reference: &str) -> Result<()>;

    /// Name of the checked out branch, `None` on a detached HEAD
    async fn current_branch(&self, dir: &Path) -> Result<Option<String>>;

    /// Whether a local branch named `reference` exists
    async fn branch_exists(&self, dir: &Path, reference: &str) -> Result<bool>;

    /// Create a local branch `reference` at HEAD without checking it out
    async fn branch(&self, dir: &Path, reference: &str) -> Result<()>;

    /// Stage `filepath`, recursively
    async fn add(&self, dir: &Path, filepath: &str) -> Result<()>;

    async fn commit(
        &self,
        dir: &Path,
        message: &str,
        author: &Signature,
        committer: &Signature,
    ) -> Result<()>;

    /// Push HEAD to `remote_ref` on `remote`
    async fn push(&self, dir: &Path, remote: &str, remote_ref: &str) -> Result<()>;
}
