//! Azure DevOps workflow types

use ado_client::GitPullRequest;

/// Organization and personal access token for the hosted service
#[derive(Clone, PartialEq, Eq)]
pub struct AdoCredentials {
    pub org: String,
    pub token: String,
}

impl AdoCredentials {
    pub fn new(org: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for AdoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdoCredentials")
            .field("org", &self.org)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Inputs for [`create_ado_pull_request`](super::create_ado_pull_request)
#[derive(Debug, Clone)]
pub struct PullRequestOptions {
    /// Sent to the service unmodified
    pub pull_request: GitPullRequest,
    pub auth: AdoCredentials,
    pub repo_id: String,
    pub project: Option<String>,
    pub supports_iterations: Option<bool>,
}

impl PullRequestOptions {
    pub fn new(
        pull_request: GitPullRequest,
        auth: AdoCredentials,
        repo_id: impl Into<String>,
    ) -> Self {
        Self {
            pull_request,
            auth,
            repo_id: repo_id.into(),
            project: None,
            supports_iterations: None,
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_supports_iterations(mut self, supports_iterations: bool) -> Self {
        self.supports_iterations = Some(supports_iterations);
        self
    }
}
