//! scaffold-publish - Publish generated scaffolding to Azure DevOps
//!
//! Three independent steps for a scaffolding pipeline:
//!
//! - [`git::clone_repo`]: clone a remote, register it and check out a branch
//! - [`git::commit_and_push_branch`]: commit everything and push a branch
//! - [`ado::create_ado_pull_request`]: open a pull request
//!
//! Each step runs its calls strictly in order and returns the first failure
//! unchanged. Concurrent calls against the same working directory must be
//! serialized by the caller.

pub mod ado;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;

pub use error::{Error, Result};

// Re-export commonly used types
pub use ado::{AdoCredentials, PullRequestOptions, create_ado_pull_request};
pub use commands::{Command, CommandContext};
pub use config::PublishConfig;
pub use git::{
    AuthorInfo, CloneOptions, GitCredentials, PublishOptions, VersionControl, clone_repo,
    commit_and_push_branch,
};

/// Helper function to load the default config file
pub fn load_default_config() -> anyhow::Result<PublishConfig> {
    PublishConfig::load(constants::config::DEFAULT_CONFIG_FILE)
}
