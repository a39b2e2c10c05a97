//! Hosted-service client seams and their REST implementation

use crate::error::Result;
use ado_client::{GitApi, GitPullRequest, PersonalAccessTokenHandler, WebApi};
use async_trait::async_trait;

/// Builds an authenticated connection to one organization
pub trait ConnectionFactory: Send + Sync {
    fn connect(
        &self,
        service_url: &str,
        auth: PersonalAccessTokenHandler,
    ) -> Result<Box<dyn ServiceConnection>>;
}

/// An authenticated connection
#[async_trait]
pub trait ServiceConnection: Send + Sync {
    /// Client scoped to the Git area
    async fn git_api(&self) -> Result<Box<dyn GitPullRequestApi>>;
}

/// Pull request operations of the Git area
#[async_trait]
pub trait GitPullRequestApi: Send + Sync {
    async fn create_pull_request(
        &self,
        pull_request: &GitPullRequest,
        repo_id: &str,
        project: Option<&str>,
        supports_iterations: Option<bool>,
    ) -> Result<GitPullRequest>;
}

/// [`ConnectionFactory`] talking to the Azure DevOps REST API
#[derive(Default)]
pub struct RestConnectionFactory {
    client: Option<reqwest::Client>,
}

impl RestConnectionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an HTTP client (proxy settings, timeouts) across connections
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl ConnectionFactory for RestConnectionFactory {
    fn connect(
        &self,
        service_url: &str,
        auth: PersonalAccessTokenHandler,
    ) -> Result<Box<dyn ServiceConnection>> {
        let web_api = match &self.client {
            Some(client) => WebApi::with_client(client.clone(), service_url, auth),
            None => WebApi::new(service_url, auth),
        };
        Ok(Box::new(RestConnection { web_api }))
    }
}

struct RestConnection {
    web_api: WebApi,
}

#[async_trait]
impl ServiceConnection for RestConnection {
    async fn git_api(&self) -> Result<Box<dyn GitPullRequestApi>> {
        Ok(Box::new(RestGitApi {
            inner: self.web_api.git_api(),
        }))
    }
}

struct RestGitApi {
    inner: GitApi,
}

#[async_trait]
impl GitPullRequestApi for RestGitApi {
    async fn create_pull_request(
        &self,
        pull_request: &GitPullRequest,
        repo_id: &str,
        project: Option<&str>,
        supports_iterations: Option<bool>,
    ) -> Result<GitPullRequest> {
        let created = self
            .inner
            .create_pull_request(pull_request, repo_id, project, supports_iterations)
            .await?;
        Ok(created)
    }
}
