//! Personal access token authentication

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Authenticates requests with an Azure DevOps personal access token
///
/// Azure DevOps accepts a PAT as the password half of HTTP Basic credentials
/// with an empty user name.
#[derive(Clone)]
pub struct PersonalAccessTokenHandler {
    token: String,
}

impl PersonalAccessTokenHandler {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn auth_header(&self) -> String {
        let encoded = STANDARD.encode(format!(":{}", self.token));
        format!("Basic {}", encoded)
    }
}

impl std::fmt::Debug for PersonalAccessTokenHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonalAccessTokenHandler")
            .field("token", &"<redacted>")
            .finish()
    }
}
