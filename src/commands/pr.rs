//! Pull request command implementation

use super::validators::require_ado_token;
use super::{Command, CommandContext};
use crate::ado;
use anyhow::Result;
use async_trait::async_trait;

/// Open the configured pull request on Azure DevOps
pub struct PrCommand;

#[async_trait]
impl Command for PrCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let token = require_ado_token(context.ado_token.as_deref())?;
        let options = context.config.pull_request_options(token)?;

        ado::create_ado_pull_request(context.connections.as_ref(), &options).await?;
        Ok(())
    }
}
