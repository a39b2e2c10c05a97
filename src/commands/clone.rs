//! Clone command implementation

use super::{Command, CommandContext};
use crate::git;
use anyhow::Result;
use async_trait::async_trait;

/// Clone the configured repository and check out its branch
pub struct CloneCommand;

#[async_trait]
impl Command for CloneCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let options = context.config.clone_options();
        git::clone_repo(context.git.as_ref(), &options).await?;
        Ok(())
    }
}
