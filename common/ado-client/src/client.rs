//! Organization-scoped Azure DevOps connection

use crate::auth::PersonalAccessTokenHandler;
use crate::pull_requests::GitApi;

/// REST API version sent with every request
pub const API_VERSION: &str = "7.1";

/// Connection to one Azure DevOps organization
///
/// Holds the organization URL, the credential handler and a shared HTTP
/// client. Area clients such as [`GitApi`] are obtained from it and borrow
/// the same HTTP client.
pub struct WebApi {
    pub(crate) client: reqwest::Client,
    pub(crate) server_url: String,
    pub(crate) auth: PersonalAccessTokenHandler,
}

impl WebApi {
    /// Create a connection for `server_url`, e.g. `https://dev.azure.com/my-org`
    pub fn new(server_url: impl Into<String>, auth: PersonalAccessTokenHandler) -> Self {
        Self::with_client(reqwest::Client::new(), server_url, auth)
    }

    /// Create a connection reusing an existing HTTP client
    pub fn with_client(
        client: reqwest::Client,
        server_url: impl Into<String>,
        auth: PersonalAccessTokenHandler,
    ) -> Self {
        Self {
            client,
            server_url: server_url.into().trim_end_matches('/').to_string(),
            auth,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Client for the Git area of the API
    pub fn git_api(&self) -> GitApi {
        GitApi::new(self.client.clone(), self.server_url.clone(), self.auth.clone())
    }
}
