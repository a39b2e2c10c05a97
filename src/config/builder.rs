//! Configuration builder utilities

use super::loader::{PublishConfig, PublishSettings, PullRequestSettings, RepositorySettings};
use crate::constants::git::{DEFAULT_CLONE_BRANCH, DEFAULT_PUBLISH_BRANCH, DEFAULT_REMOTE};
use crate::git::AuthorInfo;
use std::path::PathBuf;

/// Builder for creating publishing configurations
pub struct PublishConfigBuilder {
    repository: RepositorySettings,
    publish: Option<PublishSettings>,
    pull_request: Option<PullRequestSettings>,
}

impl PublishConfigBuilder {
    /// Create a new builder for cloning `url` into `dir`
    pub fn new(url: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            repository: RepositorySettings {
                url: url.into(),
                dir: dir.into(),
                remote: DEFAULT_REMOTE.to_string(),
                branch: DEFAULT_CLONE_BRANCH.to_string(),
            },
            publish: None,
            pull_request: None,
        }
    }

    /// Set the remote name
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.repository.remote = remote.into();
        self
    }

    /// Set the branch checked out after cloning
    pub fn with_clone_branch(mut self, branch: impl Into<String>) -> Self {
        self.repository.branch = branch.into();
        self
    }

    /// Add a publish step with the given commit message
    pub fn with_publish(mut self, commit_message: impl Into<String>) -> Self {
        self.publish = Some(PublishSettings {
            branch: DEFAULT_PUBLISH_BRANCH.to_string(),
            commit_message: commit_message.into(),
            author: None,
        });
        self
    }

    /// Set the publish branch; has no effect without [`with_publish`](Self::with_publish)
    pub fn with_publish_branch(mut self, branch: impl Into<String>) -> Self {
        if let Some(publish) = &mut self.publish {
            publish.branch = branch.into();
        }
        self
    }

    /// Set the commit author; has no effect without [`with_publish`](Self::with_publish)
    pub fn with_author(mut self, author: AuthorInfo) -> Self {
        if let Some(publish) = &mut self.publish {
            publish.author = Some(author);
        }
        self
    }

    /// Add a pull request step
    pub fn with_pull_request(
        mut self,
        organization: impl Into<String>,
        repository_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.pull_request = Some(PullRequestSettings {
            organization: organization.into(),
            project: None,
            repository_id: repository_id.into(),
            title: title.into(),
            description: None,
            target_branch: None,
            draft: false,
            supports_iterations: None,
            reviewers: Vec::new(),
            work_items: Vec::new(),
            labels: Vec::new(),
        });
        self
    }

    /// Set the project; has no effect without [`with_pull_request`](Self::with_pull_request)
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        if let Some(pr) = &mut self.pull_request {
            pr.project = Some(project.into());
        }
        self
    }

    /// Set the pull request target; has no effect without [`with_pull_request`](Self::with_pull_request)
    pub fn with_target_branch(mut self, branch: impl Into<String>) -> Self {
        if let Some(pr) = &mut self.pull_request {
            pr.target_branch = Some(branch.into());
        }
        self
    }

    /// Set the pull request description; has no effect without [`with_pull_request`](Self::with_pull_request)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        if let Some(pr) = &mut self.pull_request {
            pr.description = Some(description.into());
        }
        self
    }

    /// Open the pull request as a draft
    pub fn as_draft(mut self) -> Self {
        if let Some(pr) = &mut self.pull_request {
            pr.draft = true;
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> PublishConfig {
        PublishConfig {
            repository: self.repository,
            publish: self.publish,
            pull_request: self.pull_request,
        }
    }
}
