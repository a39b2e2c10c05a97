//! Azure DevOps integration module
//!
//! Opens pull requests against Azure DevOps hosted repositories. The
//! hosted-service client is reached through three small traits so the
//! workflow can run against the REST client in production and a fake in
//! tests:
//!
//! - [`ConnectionFactory`]: builds a connection from a service URL and a
//!   token handler
//! - [`ServiceConnection`]: hands out the Git-area client
//! - [`GitPullRequestApi`]: creates the pull request
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scaffold_publish::ado::{AdoCredentials, PullRequestOptions, create_pull_request_with_token};
//! use scaffold_publish::ado::GitPullRequest;
//!
//! # async fn example() -> scaffold_publish::Result<()> {
//! let pr = GitPullRequest::new("refs/heads/scaffolder", "refs/heads/main", "Scaffold my-service");
//! let options = PullRequestOptions::new(pr, AdoCredentials::new("my-org", "pat"), "my-service")
//!     .with_project("platform");
//!
//! let created = create_pull_request_with_token(&options).await?;
//! println!("Created pull request {:?}", created.pull_request_id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod connection;
pub mod types;

pub use ado_client::{GitPullRequest, PersonalAccessTokenHandler};
pub use api::{create_ado_pull_request, create_pull_request_with_token, service_url};
pub use connection::{
    ConnectionFactory, GitPullRequestApi, RestConnectionFactory, ServiceConnection,
};
pub use types::{AdoCredentials, PullRequestOptions};
