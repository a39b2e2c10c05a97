//! Push command implementation

use super::{Command, CommandContext};
use crate::git;
use anyhow::Result;
use async_trait::async_trait;

/// Commit the working directory and push the publish branch
#[derive(Default)]
pub struct PushCommand {
    /// Overrides `publish.branch`
    pub branch: Option<String>,
    /// Overrides `publish.commit_message`
    pub message: Option<String>,
}

#[async_trait]
impl Command for PushCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let mut options = context.config.publish_options()?;

        if let Some(branch) = &self.branch {
            options = options.with_branch(branch);
        }
        if let Some(message) = &self.message {
            options.commit_message = message.clone();
        }

        git::commit_and_push_branch(context.git.as_ref(), &options).await?;
        Ok(())
    }
}
