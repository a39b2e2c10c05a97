//! Common test support utilities and fixtures
//!
//! Recording fakes for the version-control and hosted-service seams, plus
//! helpers for building real git repositories on disk.

#![allow(dead_code)]

use async_trait::async_trait;
use scaffold_publish::ado::{
    ConnectionFactory, GitPullRequest, GitPullRequestApi, PersonalAccessTokenHandler,
    ServiceConnection,
};
use scaffold_publish::git::{Signature, VersionControl};
use scaffold_publish::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

// =================================
// ===== Version control fake
// =================================

/// One call made against [`RecordingGit`]
#[derive(Debug, Clone, PartialEq)]
pub enum GitCall {
    Clone {
        url: String,
        dir: PathBuf,
    },
    AddRemote {
        dir: PathBuf,
        remote: String,
        url: String,
    },
    Checkout {
        dir: PathBuf,
        reference: String,
    },
    CurrentBranch {
        dir: PathBuf,
    },
    BranchExists {
        dir: PathBuf,
        reference: String,
    },
    Branch {
        dir: PathBuf,
        reference: String,
    },
    Add {
        dir: PathBuf,
        filepath: String,
    },
    Commit {
        dir: PathBuf,
        message: String,
        author: Signature,
        committer: Signature,
    },
    Push {
        dir: PathBuf,
        remote: String,
        remote_ref: String,
    },
}

impl GitCall {
    pub fn name(&self) -> &'static str {
        match self {
            GitCall::Clone { .. } => "clone",
            GitCall::AddRemote { .. } => "add_remote",
            GitCall::Checkout { .. } => "checkout",
            GitCall::CurrentBranch { .. } => "current_branch",
            GitCall::BranchExists { .. } => "branch_exists",
            GitCall::Branch { .. } => "branch",
            GitCall::Add { .. } => "add",
            GitCall::Commit { .. } => "commit",
            GitCall::Push { .. } => "push",
        }
    }
}

/// [`VersionControl`] that records every call and touches nothing
#[derive(Default)]
pub struct RecordingGit {
    calls: Mutex<Vec<GitCall>>,
    current_branch: Option<String>,
    local_branches: Vec<String>,
    fail_on: Option<&'static str>,
}

impl RecordingGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `branch` as checked out
    pub fn on_branch(mut self, branch: &str) -> Self {
        self.current_branch = Some(branch.to_string());
        self
    }

    /// Report `branch` as an existing local branch
    pub fn with_local_branch(mut self, branch: &str) -> Self {
        self.local_branches.push(branch.to_string());
        self
    }

    /// Fail the first call named `operation` (see [`GitCall::name`])
    pub fn failing_on(mut self, operation: &'static str) -> Self {
        self.fail_on = Some(operation);
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls().iter().map(GitCall::name).collect()
    }

    fn record(&self, call: GitCall) -> Result<()> {
        let name = call.name();
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(name) {
            return Err(Error::VersionControl {
                operation: name,
                message: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VersionControl for RecordingGit {
    async fn clone_repository(&self, url: &str, dir: &Path) -> Result<()> {
        self.record(GitCall::Clone {
            url: url.to_string(),
            dir: dir.to_path_buf(),
        })
    }

    async fn add_remote(&self, dir: &Path, remote: &str, url: &str) -> Result<()> {
        self.record(GitCall::AddRemote {
            dir: dir.to_path_buf(),
            remote: remote.to_string(),
            url: url.to_string(),
        })
    }

    async fn checkout(&self, dir: &Path, reference: &str) -> Result<()> {
        self.record(GitCall::Checkout {
            dir: dir.to_path_buf(),
            reference: reference.to_string(),
        })
    }

    async fn current_branch(&self, dir: &Path) -> Result<Option<String>> {
        self.record(GitCall::CurrentBranch {
            dir: dir.to_path_buf(),
        })?;
        Ok(self.current_branch.clone())
    }

    async fn branch_exists(&self, dir: &Path, reference: &str) -> Result<bool> {
        self.record(GitCall::BranchExists {
            dir: dir.to_path_buf(),
            reference: reference.to_string(),
        })?;
        Ok(self.local_branches.iter().any(|b| b == reference))
    }

    async fn branch(&self, dir: &Path, reference: &str) -> Result<()> {
        self.record(GitCall::Branch {
            dir: dir.to_path_buf(),
            reference: reference.to_string(),
        })
    }

    async fn add(&self, dir: &Path, filepath: &str) -> Result<()> {
        self.record(GitCall::Add {
            dir: dir.to_path_buf(),
            filepath: filepath.to_string(),
        })
    }

    async fn commit(
        &self,
        dir: &Path,
        message: &str,
        author: &Signature,
        committer: &Signature,
    ) -> Result<()> {
        self.record(GitCall::Commit {
            dir: dir.to_path_buf(),
            message: message.to_string(),
            author: author.clone(),
            committer: committer.clone(),
        })
    }

    async fn push(&self, dir: &Path, remote: &str, remote_ref: &str) -> Result<()> {
        self.record(GitCall::Push {
            dir: dir.to_path_buf(),
            remote: remote.to_string(),
            remote_ref: remote_ref.to_string(),
        })
    }
}

// =================================
// ===== Hosted service fake
// =================================

/// What the fake service answers to a create request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServiceBehavior {
    Create { pull_request_id: u64 },
    RejectToken,
    MissingRepository,
    DuplicatePullRequest,
}

/// A create request as received by the fake service
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub service_url: String,
    pub token: String,
    pub pull_request: GitPullRequest,
    pub repo_id: String,
    pub project: Option<String>,
    pub supports_iterations: Option<bool>,
}

#[derive(Default)]
struct ServiceState {
    events: Vec<&'static str>,
    requests: Vec<RecordedRequest>,
}

/// [`ConnectionFactory`] whose connections record requests in memory
#[derive(Clone)]
pub struct FakeConnectionFactory {
    state: Arc<Mutex<ServiceState>>,
    behavior: ServiceBehavior,
}

impl FakeConnectionFactory {
    pub fn new(behavior: ServiceBehavior) -> Self {
        Self {
            state: Arc::new(Mutex::new(ServiceState::default())),
            behavior,
        }
    }

    pub fn creating(pull_request_id: u64) -> Self {
        Self::new(ServiceBehavior::Create { pull_request_id })
    }

    /// `connect`, `git_api` and `create_pull_request`, in call order
    pub fn events(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }
}

impl ConnectionFactory for FakeConnectionFactory {
    fn connect(
        &self,
        service_url: &str,
        auth: PersonalAccessTokenHandler,
    ) -> Result<Box<dyn ServiceConnection>> {
        self.state.lock().unwrap().events.push("connect");
        Ok(Box::new(FakeConnection {
            state: self.state.clone(),
            behavior: self.behavior,
            service_url: service_url.to_string(),
            token: auth.token().to_string(),
        }))
    }
}

struct FakeConnection {
    state: Arc<Mutex<ServiceState>>,
    behavior: ServiceBehavior,
    service_url: String,
    token: String,
}

#[async_trait]
impl ServiceConnection for FakeConnection {
    async fn git_api(&self) -> Result<Box<dyn GitPullRequestApi>> {
        self.state.lock().unwrap().events.push("git_api");
        Ok(Box::new(FakeGitApi {
            state: self.state.clone(),
            behavior: self.behavior,
            service_url: self.service_url.clone(),
            token: self.token.clone(),
        }))
    }
}

struct FakeGitApi {
    state: Arc<Mutex<ServiceState>>,
    behavior: ServiceBehavior,
    service_url: String,
    token: String,
}

#[async_trait]
impl GitPullRequestApi for FakeGitApi {
    async fn create_pull_request(
        &self,
        pull_request: &GitPullRequest,
        repo_id: &str,
        project: Option<&str>,
        supports_iterations: Option<bool>,
    ) -> Result<GitPullRequest> {
        {
            let mut state = self.state.lock().unwrap();
            state.events.push("create_pull_request");
            state.requests.push(RecordedRequest {
                service_url: self.service_url.clone(),
                token: self.token.clone(),
                pull_request: pull_request.clone(),
                repo_id: repo_id.to_string(),
                project: project.map(str::to_string),
                supports_iterations,
            });
        }

        match self.behavior {
            ServiceBehavior::Create { pull_request_id } => {
                let mut created = pull_request.clone();
                created.pull_request_id = Some(pull_request_id);
                Ok(created)
            }
            ServiceBehavior::RejectToken => Err(Error::Authentication(
                "TF400813: The user is not authorized to access this resource.".to_string(),
            )),
            ServiceBehavior::MissingRepository => Err(Error::NotFound(format!(
                "TF401019: The Git repository with name or identifier {} does not exist.",
                repo_id
            ))),
            ServiceBehavior::DuplicatePullRequest => Err(Error::Service {
                status: Some(409),
                message: "TF401179: An active pull request for the source and target branch already exists.".to_string(),
            }),
        }
    }
}

// =================================
// ===== Real git helpers
// =================================

/// Run git in `dir` and return trimmed stdout, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a bare repository under `root` whose `main` branch holds one commit
///
/// Returns the bare repository's path.
pub fn create_bare_remote(root: &Path) -> PathBuf {
    let seed = root.join("seed");
    fs::create_dir_all(&seed).expect("Failed to create seed directory");

    git(&seed, &["init", "--quiet"]);
    git(&seed, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    fs::write(seed.join("README.md"), "# Template\n").expect("Failed to write README");
    git(&seed, &["add", "."]);
    git(
        &seed,
        &[
            "-c",
            "user.name=Seed",
            "-c",
            "user.email=seed@example.com",
            "-c",
            "commit.gpgsign=false",
            "commit",
            "--quiet",
            "-m",
            "Initial commit",
        ],
    );

    let bare = root.join("remote.git");
    git(
        root,
        &[
            "clone",
            "--quiet",
            "--bare",
            seed.to_str().expect("Seed path not UTF-8"),
            bare.to_str().expect("Bare path not UTF-8"),
        ],
    );
    bare
}

/// `file://` URL for a local repository
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
