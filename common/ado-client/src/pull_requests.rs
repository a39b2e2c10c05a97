//! Git area client: pull request operations

use crate::auth::PersonalAccessTokenHandler;
use crate::client::API_VERSION;
use crate::error::{ApiError, Result};
use crate::types::GitPullRequest;
use reqwest::Url;

/// Client for the Git area of one organization
pub struct GitApi {
    client: reqwest::Client,
    server_url: String,
    auth: PersonalAccessTokenHandler,
}

impl GitApi {
    pub(crate) fn new(
        client: reqwest::Client,
        server_url: String,
        auth: PersonalAccessTokenHandler,
    ) -> Self {
        Self {
            client,
            server_url,
            auth,
        }
    }

    /// Build the pull request collection URL for a repository
    ///
    /// Path segments are percent-encoded, so project names with spaces are
    /// safe to pass as-is.
    pub fn pull_requests_url(&self, repository_id: &str, project: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.server_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.server_url, e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.server_url.clone()))?;
            segments.pop_if_empty();
            if let Some(project) = project {
                segments.push(project);
            }
            segments.extend(["_apis", "git", "repositories", repository_id, "pullrequests"]);
        }

        Ok(url)
    }

    /// Create a pull request
    ///
    /// # Arguments
    /// * `pull_request` - Descriptor sent as the request body, unmodified
    /// * `repository_id` - Repository id or name
    /// * `project` - Project id or name; required when `repository_id` is a name
    /// * `supports_iterations` - Whether the pull request should track iterations
    ///
    /// # Errors
    /// * [`ApiError::Authentication`] if the token is rejected
    /// * [`ApiError::NotFound`] if the repository or project does not resolve
    /// * [`ApiError::Service`] for any other failure, e.g. an active pull
    ///   request already exists for the branch pair
    pub async fn create_pull_request(
        &self,
        pull_request: &GitPullRequest,
        repository_id: &str,
        project: Option<&str>,
        supports_iterations: Option<bool>,
    ) -> Result<GitPullRequest> {
        let url = self.pull_requests_url(repository_id, project)?;

        let mut request = self
            .client
            .post(url)
            .header("Authorization", self.auth.auth_header())
            .header("Accept", "application/json")
            .query(&[("api-version", API_VERSION)]);

        if let Some(supports_iterations) = supports_iterations {
            request = request.query(&[("supportsIterations", supports_iterations)]);
        }

        let response = request.json(pull_request).send().await?;

        let status = response.status();
        // 203 carries an HTML sign-in page, not a pull request
        if !status.is_success() || status.as_u16() == 203 {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &error_text));
        }

        let created: GitPullRequest = response.json().await?;
        Ok(created)
    }
}
