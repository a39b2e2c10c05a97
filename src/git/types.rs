//! Credential and identity types for git operations

use crate::constants::git::{DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Credentials for talking to a git remote over HTTP(S)
#[derive(Clone, PartialEq, Eq)]
pub enum GitCredentials {
    UsernamePassword { username: String, password: String },
    Token { token: String },
}

impl GitCredentials {
    pub fn username_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        GitCredentials::UsernamePassword {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        GitCredentials::Token {
            token: token.into(),
        }
    }

    /// Value for an HTTP `Authorization` header
    pub fn auth_header(&self) -> String {
        match self {
            GitCredentials::UsernamePassword { username, password } => {
                let encoded = STANDARD.encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
            GitCredentials::Token { token } => format!("Bearer {}", token),
        }
    }
}

impl std::fmt::Debug for GitCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitCredentials::UsernamePassword { username, .. } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            GitCredentials::Token { .. } => f
                .debug_struct("Token")
                .field("token", &"<redacted>")
                .finish(),
        }
    }
}

/// Caller-supplied author identity; either field may be left out
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthorInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Fill each missing field from the default identity
    pub fn resolve(&self) -> Signature {
        Signature {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTHOR_NAME.to_string()),
            email: self
                .email
                .clone()
                .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string()),
        }
    }
}

/// Concrete identity recorded as author and committer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub email: String,
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            name: DEFAULT_AUTHOR_NAME.to_string(),
            email: DEFAULT_AUTHOR_EMAIL.to_string(),
        }
    }
}

/// Resolve an optional author into the identity used for the commit
pub fn resolve_signature(author: Option<&AuthorInfo>) -> Signature {
    author.map(AuthorInfo::resolve).unwrap_or_default()
}
