//! [`VersionControl`] backed by the system `git` executable
//!
//! Proxies, SSH configuration and credential helpers apply as they would on
//! the command line.

use super::VersionControl;
use super::types::{GitCredentials, Signature};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;

/// Runs git commands as child processes
///
/// Credentials are passed per invocation as an `http.extraHeader` config
/// override and never written to the repository's configuration.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    credentials: Option<GitCredentials>,
}

impl SystemGit {
    pub fn from_auth(credentials: GitCredentials) -> Self {
        Self {
            credentials: Some(credentials),
        }
    }

    /// Backend for remotes that need no HTTP credentials (SSH, `file://`)
    pub fn anonymous() -> Self {
        Self::default()
    }

    fn command(&self, dir: Option<&Path>) -> Command {
        let mut cmd = Command::new("git");
        cmd.env("GIT_TERMINAL_PROMPT", "0");

        if let Some(credentials) = &self.credentials {
            cmd.arg("-c").arg(format!(
                "http.extraHeader=Authorization: {}",
                credentials.auth_header()
            ));
        }

        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        cmd
    }

    async fn output(operation: &'static str, mut cmd: Command) -> Result<Output> {
        cmd.output()
            .await
            .map_err(|e| Error::version_control(operation, format!("failed to execute git: {e}")))
    }

    /// Run to completion, failing on a non-zero exit status
    async fn run(operation: &'static str, cmd: Command) -> Result<String> {
        let output = Self::output(operation, cmd).await?;

        if !output.status.success() {
            return Err(Error::version_control(operation, failure_message(&output)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// git reports some failures, such as "nothing to commit", on stdout
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !stderr.is_empty() {
        return stderr;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return stdout;
    }

    match output.status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}

#[async_trait]
impl VersionControl for SystemGit {
    async fn clone_repository(&self, url: &str, dir: &Path) -> Result<()> {
        let mut cmd = self.command(None);
        cmd.arg("clone").arg("--").arg(url).arg(dir);
        Self::run("clone", cmd).await?;
        Ok(())
    }

    async fn add_remote(&self, dir: &Path, remote: &str, url: &str) -> Result<()> {
        // clone already registers `origin`; re-adding it is not an error here
        let mut lookup = self.command(Some(dir));
        lookup.args(["remote", "get-url", remote]);
        let existing = Self::output("remote", lookup).await?;

        if existing.status.success() {
            if String::from_utf8_lossy(&existing.stdout).trim() == url {
                return Ok(());
            }
            let mut cmd = self.command(Some(dir));
            cmd.args(["remote", "set-url", remote, url]);
            Self::run("remote", cmd).await?;
            return Ok(());
        }

        let mut cmd = self.command(Some(dir));
        cmd.args(["remote", "add", remote, url]);
        Self::run("remote", cmd).await?;
        Ok(())
    }

    async fn checkout(&self, dir: &Path, reference: &str) -> Result<()> {
        let mut cmd = self.command(Some(dir));
        // trailing `--` keeps git from reading `reference` as a pathspec
        cmd.args(["checkout", reference, "--"]);
        Self::run("checkout", cmd).await?;
        Ok(())
    }

    async fn current_branch(&self, dir: &Path) -> Result<Option<String>> {
        let mut cmd = self.command(Some(dir));
        cmd.args(["symbolic-ref", "--quiet", "--short", "HEAD"]);
        let output = Self::output("symbolic-ref", cmd).await?;

        match output.status.code() {
            Some(0) => Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            )),
            // detached HEAD
            Some(1) => Ok(None),
            _ => Err(Error::version_control(
                "symbolic-ref",
                failure_message(&output),
            )),
        }
    }

    async fn branch_exists(&self, dir: &Path, reference: &str) -> Result<bool> {
        let mut cmd = self.command(Some(dir));
        cmd.args(["show-ref", "--verify", "--quiet"])
            .arg(format!("refs/heads/{reference}"));
        let output = Self::output("show-ref", cmd).await?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(Error::version_control("show-ref", failure_message(&output))),
        }
    }

    async fn branch(&self, dir: &Path, reference: &str) -> Result<()> {
        let mut cmd = self.command(Some(dir));
        cmd.args(["branch", reference]);
        Self::run("branch", cmd).await?;
        Ok(())
    }

    async fn add(&self, dir: &Path, filepath: &str) -> Result<()> {
        let mut cmd = self.command(Some(dir));
        cmd.args(["add", "--all", "--", filepath]);
        Self::run("add", cmd).await?;
        Ok(())
    }

    async fn commit(
        &self,
        dir: &Path,
        message: &str,
        author: &Signature,
        committer: &Signature,
    ) -> Result<()> {
        let mut cmd = self.command(Some(dir));
        cmd.args(["commit", "-m", message])
            .env("GIT_AUTHOR_NAME", &author.name)
            .env("GIT_AUTHOR_EMAIL", &author.email)
            .env("GIT_COMMITTER_NAME", &committer.name)
            .env("GIT_COMMITTER_EMAIL", &committer.email);
        Self::run("commit", cmd).await?;
        Ok(())
    }

    async fn push(&self, dir: &Path, remote: &str, remote_ref: &str) -> Result<()> {
        let mut cmd = self.command(Some(dir));
        cmd.args(["push", remote])
            .arg(format!("HEAD:{remote_ref}"));
        Self::run("push", cmd).await?;
        Ok(())
    }
}
