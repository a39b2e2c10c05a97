//! Publish command implementation
//!
//! Runs clone, push and pull request in sequence and stops at the first
//! failure. Steps are never retried or rolled back.

use super::{CloneCommand, Command, CommandContext, PrCommand, PushCommand};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;

/// Clone, commit and push, then open a pull request
#[derive(Default)]
pub struct PublishCommand {
    /// Publish into an existing checkout instead of cloning first
    pub skip_clone: bool,
}

#[async_trait]
impl Command for PublishCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        if context.config.publish.is_none() {
            anyhow::bail!("Configuration has no 'publish' section");
        }

        if !self.skip_clone {
            CloneCommand
                .execute(context)
                .await
                .context("Clone step failed")?;
        }

        PushCommand::default()
            .execute(context)
            .await
            .context("Push step failed")?;

        if context.config.pull_request.is_some() {
            PrCommand
                .execute(context)
                .await
                .context("Pull request step failed")?;
        } else {
            println!(
                "{}",
                "No 'pull_request' section configured, skipping pull request".yellow()
            );
        }

        println!("{}", "Done publishing".green());
        Ok(())
    }
}
