//! Error taxonomy for the publishing operations
//!
//! Failures from the version-control backend and the hosted service are
//! returned to the caller as-is; nothing here retries or rolls back.

use ado_client::ApiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A clone, branch, checkout, stage, commit or push failed
    #[error("git {operation} failed: {message}")]
    VersionControl {
        operation: &'static str,
        message: String,
    },

    /// The hosted service rejected the personal access token
    #[error("authentication rejected: {0}")]
    Authentication(String),

    /// The referenced repository or project does not exist on the hosted service
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other hosted-service failure, including duplicate pull requests
    #[error("service error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    Service {
        status: Option<u16>,
        message: String,
    },
}

impl Error {
    pub(crate) fn version_control(operation: &'static str, message: impl Into<String>) -> Self {
        Error::VersionControl {
            operation,
            message: message.into(),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Authentication { message, .. } => Error::Authentication(message),
            ApiError::NotFound { message } => Error::NotFound(message),
            ApiError::Service { status, message } => Error::Service {
                status: Some(status),
                message,
            },
            other => Error::Service {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_control_display() {
        let err = Error::version_control("push", "rejected (non-fast-forward)");
        assert_eq!(
            err.to_string(),
            "git push failed: rejected (non-fast-forward)"
        );
    }

    #[test]
    fn test_service_display_with_and_without_status() {
        let with = Error::Service {
            status: Some(409),
            message: "exists".to_string(),
        };
        assert_eq!(with.to_string(), "service error (409): exists");

        let without = Error::Service {
            status: None,
            message: "connection reset".to_string(),
        };
        assert_eq!(without.to_string(), "service error: connection reset");
    }

    #[test]
    fn test_api_errors_map_variant_for_variant() {
        let auth: Error = ApiError::Authentication {
            status: 401,
            message: "bad token".to_string(),
        }
        .into();
        assert!(matches!(auth, Error::Authentication(m) if m == "bad token"));

        let missing: Error = ApiError::NotFound {
            message: "no repo".to_string(),
        }
        .into();
        assert!(matches!(missing, Error::NotFound(m) if m == "no repo"));

        let conflict: Error = ApiError::Service {
            status: 409,
            message: "dup".to_string(),
        }
        .into();
        assert!(matches!(conflict, Error::Service { status: Some(409), .. }));

        let bad_url: Error = ApiError::InvalidUrl("x".to_string()).into();
        assert!(matches!(bad_url, Error::Service { status: None, .. }));
    }
}
