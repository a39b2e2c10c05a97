//! Configuration file loading and saving

use super::validation;
use crate::ado::{AdoCredentials, GitPullRequest, PullRequestOptions};
use crate::constants::git::{
    BRANCH_REF_PREFIX, DEFAULT_CLONE_BRANCH, DEFAULT_PUBLISH_BRANCH, DEFAULT_REMOTE,
};
use crate::git::{AuthorInfo, CloneOptions, PublishOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

fn default_clone_branch() -> String {
    DEFAULT_CLONE_BRANCH.to_string()
}

fn default_publish_branch() -> String {
    DEFAULT_PUBLISH_BRANCH.to_string()
}

/// Where the repository comes from and where it is checked out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySettings {
    pub url: String,
    pub dir: PathBuf,
    #[serde(default = "default_remote")]
    pub remote: String,
    #[serde(default = "default_clone_branch")]
    pub branch: String,
}

/// How generated content is committed and pushed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishSettings {
    #[serde(default = "default_publish_branch")]
    pub branch: String,
    pub commit_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorInfo>,
}

/// The pull request opened after publishing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestSettings {
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub repository_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Defaults to the clone branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_iterations: Option<bool>,
    /// Reviewer identity ids
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<String>,
    /// Work item ids to link
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

impl PullRequestSettings {
    /// Build the descriptor for `source_branch` into the configured target
    /// (or `default_target`)
    pub fn to_descriptor(&self, source_branch: &str, default_target: &str) -> GitPullRequest {
        let target = self.target_branch.as_deref().unwrap_or(default_target);

        let mut pr = GitPullRequest::new(
            qualify_branch(source_branch),
            qualify_branch(target),
            self.title.clone(),
        );

        if let Some(description) = &self.description {
            pr = pr.with_description(description.clone());
        }
        if self.draft {
            pr = pr.as_draft();
        }
        for reviewer in &self.reviewers {
            pr = pr.with_reviewer(reviewer.clone());
        }
        for work_item in &self.work_items {
            pr = pr.with_work_item(work_item.clone());
        }
        for label in &self.labels {
            pr = pr.with_label(label.clone());
        }

        pr
    }
}

/// Prefix a short branch name with `refs/heads/`
pub fn qualify_branch(branch: &str) -> String {
    if branch.starts_with(BRANCH_REF_PREFIX) {
        branch.to_string()
    } else {
        format!("{}{}", BRANCH_REF_PREFIX, branch)
    }
}

/// A publishing job: clone, publish and open a pull request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishConfig {
    pub repository: RepositorySettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish: Option<PublishSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestSettings>,
}

impl PublishConfig {
    /// Load configuration from a file
    ///
    /// A relative `repository.dir` is resolved against the directory holding
    /// the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config: PublishConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.repository.dir.is_relative()
            && let Some(parent) = path.parent()
        {
            config.repository.dir = parent.join(&config.repository.dir);
        }

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;

        // Add document marker for yamllint compliance
        let yaml_content = format!("---\n{}", yaml);

        std::fs::write(path.as_ref(), yaml_content)
            .with_context(|| format!("Failed to write config file {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Branch the publish step pushes to
    pub fn publish_branch(&self) -> &str {
        self.publish
            .as_ref()
            .map(|p| p.branch.as_str())
            .unwrap_or(DEFAULT_PUBLISH_BRANCH)
    }

    pub fn clone_options(&self) -> CloneOptions {
        CloneOptions::new(&self.repository.dir, &self.repository.url)
            .with_remote(&self.repository.remote)
            .with_branch(&self.repository.branch)
    }

    pub fn publish_options(&self) -> Result<PublishOptions> {
        let publish = self
            .publish
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Configuration has no 'publish' section"))?;

        let mut options = PublishOptions::new(&self.repository.dir, &publish.commit_message)
            .with_remote(&self.repository.remote)
            .with_branch(&publish.branch);

        if let Some(author) = &publish.author {
            options = options.with_author(author.clone());
        }

        Ok(options)
    }

    pub fn pull_request_options(&self, token: &str) -> Result<PullRequestOptions> {
        let settings = self
            .pull_request
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Configuration has no 'pull_request' section"))?;

        let descriptor = settings.to_descriptor(self.publish_branch(), &self.repository.branch);

        let mut options = PullRequestOptions::new(
            descriptor,
            AdoCredentials::new(&settings.organization, token),
            &settings.repository_id,
        );

        if let Some(project) = &settings.project {
            options = options.with_project(project);
        }
        if let Some(supports_iterations) = settings.supports_iterations {
            options = options.with_supports_iterations(supports_iterations);
        }

        Ok(options)
    }
}
