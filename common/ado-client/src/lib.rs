//! Azure DevOps REST client library
//!
//! This library provides a small, typed interface to the Azure DevOps
//! Services REST API: personal access token authentication, a per-organization
//! connection and the Git area's pull request endpoint.
//!
//! ## Modules
//!
//! - [`auth`]: Personal access token handling
//! - [`client`]: Organization-scoped connection (`WebApi`)
//! - [`pull_requests`]: Git area client and pull request creation
//! - [`types`]: Pull request descriptor types
//! - [`error`]: API error taxonomy

mod auth;
mod client;
mod error;
mod pull_requests;
mod types;

// Re-export public API
pub use auth::PersonalAccessTokenHandler;
pub use client::{API_VERSION, WebApi};
pub use error::{ApiError, Result};
pub use pull_requests::GitApi;
pub use types::{
    GitPullRequest, GitPullRequestCompletionOptions, GitRepositoryRef, IdentityRef,
    IdentityRefWithVote, PullRequestStatus, ResourceRef, TeamProjectReference,
    WebApiTagDefinition,
};
