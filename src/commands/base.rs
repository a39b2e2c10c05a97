//! Base types and traits for the command pattern

use crate::ado::{ConnectionFactory, RestConnectionFactory};
use crate::config::PublishConfig;
use crate::git::{GitCredentials, SystemGit, VersionControl};
use anyhow::Result;
use std::sync::Arc;

/// Context passed to all commands containing shared configuration and backends
#[derive(Clone)]
pub struct CommandContext {
    /// The loaded configuration
    pub config: PublishConfig,
    /// Version-control backend
    pub git: Arc<dyn VersionControl>,
    /// Hosted-service connection factory
    pub connections: Arc<dyn ConnectionFactory>,
    /// Azure DevOps personal access token, if one was supplied
    pub ado_token: Option<String>,
}

impl CommandContext {
    /// Context using the system git and the Azure DevOps REST API
    pub fn new(
        config: PublishConfig,
        git_credentials: Option<GitCredentials>,
        ado_token: Option<String>,
    ) -> Self {
        let git = match git_credentials {
            Some(credentials) => SystemGit::from_auth(credentials),
            None => SystemGit::anonymous(),
        };
        Self {
            config,
            git: Arc::new(git),
            connections: Arc::new(RestConnectionFactory::new()),
            ado_token,
        }
    }

    /// Context with explicit backends
    pub fn with_backends(
        config: PublishConfig,
        git: Arc<dyn VersionControl>,
        connections: Arc<dyn ConnectionFactory>,
        ado_token: Option<String>,
    ) -> Self {
        Self {
            config,
            git,
            connections,
            ado_token,
        }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
