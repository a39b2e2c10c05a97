//! Error types for Azure DevOps API calls

use serde::Deserialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The personal access token was rejected
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    /// The organization, project or repository does not exist
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Any other non-success response from the service
    #[error("Azure DevOps API error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("invalid service url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Error body returned by the service on failure
#[derive(Deserialize)]
struct ServiceErrorBody {
    message: String,
}

impl ApiError {
    /// Classify a non-success response by status code
    ///
    /// A rejected token is answered with 401, 403, or a 203 sign-in page
    /// depending on how the request was authenticated.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServiceErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    "no response body".to_string()
                } else {
                    body.trim().to_string()
                }
            });

        match status {
            203 | 401 | 403 => ApiError::Authentication { status, message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Service { status, message },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Authentication { status, .. } | ApiError::Service { status, .. } => {
                Some(*status)
            }
            ApiError::NotFound { .. } => Some(404),
            ApiError::InvalidUrl(_) => None,
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
