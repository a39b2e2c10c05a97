//! Pull request creation workflow

use super::connection::{ConnectionFactory, RestConnectionFactory};
use super::types::PullRequestOptions;
use crate::constants::ado::BASE_URL;
use crate::error::Result;
use ado_client::{GitPullRequest, PersonalAccessTokenHandler};
use colored::*;

/// Organization URL: the fixed base followed by the organization name, verbatim
pub fn service_url(org: &str) -> String {
    format!("{}{}", BASE_URL, org)
}

/// Open a pull request on Azure DevOps
///
/// 1. Build the organization URL from `options.auth.org`
/// 2. Authenticate with the personal access token
/// 3. Obtain the Git-area client from the connection
/// 4. Submit the descriptor and wait for the service's answer
///
/// There is no check for an existing pull request first; submitting the
/// same branch pair twice is rejected by the service with a
/// [`Error::Service`](crate::Error::Service).
pub async fn create_ado_pull_request(
    factory: &dyn ConnectionFactory,
    options: &PullRequestOptions,
) -> Result<GitPullRequest> {
    let url = service_url(&options.auth.org);
    let auth = PersonalAccessTokenHandler::new(options.auth.token.clone());

    let connection = factory.connect(&url, auth)?;
    let git_api = connection.git_api().await?;

    let created = git_api
        .create_pull_request(
            &options.pull_request,
            &options.repo_id,
            options.project.as_deref(),
            options.supports_iterations,
        )
        .await?;

    println!(
        "{} | {}",
        options.repo_id.cyan().bold(),
        match created.pull_request_id {
            Some(id) => format!("Created pull request #{}", id).green(),
            None => "Created pull request".green(),
        }
    );

    Ok(created)
}

/// [`create_ado_pull_request`] over the REST API
pub async fn create_pull_request_with_token(options: &PullRequestOptions) -> Result<GitPullRequest> {
    create_ado_pull_request(&RestConnectionFactory::new(), options).await
}
