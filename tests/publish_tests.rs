//! Integration tests for the commit-and-push publisher against a recording backend

mod support;

use scaffold_publish::Error;
use scaffold_publish::constants::git::{DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME};
use scaffold_publish::git::{AuthorInfo, PublishOptions, Signature, commit_and_push_branch};
use std::path::PathBuf;
use support::{GitCall, RecordingGit};

fn commit_of(git: &RecordingGit) -> (String, Signature, Signature) {
    git.calls()
        .into_iter()
        .find_map(|call| match call {
            GitCall::Commit {
                message,
                author,
                committer,
                ..
            } => Some((message, author, committer)),
            _ => None,
        })
        .expect("no commit call recorded")
}

#[tokio::test]
async fn test_already_on_target_branch_skips_branch_and_checkout() {
    let git = RecordingGit::new().on_branch("scaffolder");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold");

    commit_and_push_branch(&git, &options).await.unwrap();

    assert_eq!(
        git.call_names(),
        vec!["current_branch", "add", "commit", "push"]
    );
}

#[tokio::test]
async fn test_new_branch_is_created_then_checked_out() {
    let git = RecordingGit::new().on_branch("main");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold");

    commit_and_push_branch(&git, &options).await.unwrap();

    assert_eq!(
        git.call_names(),
        vec![
            "current_branch",
            "branch_exists",
            "branch",
            "checkout",
            "add",
            "commit",
            "push"
        ]
    );
    let calls = git.calls();
    assert_eq!(
        calls[2],
        GitCall::Branch {
            dir: PathBuf::from("/tmp/x"),
            reference: "scaffolder".to_string(),
        }
    );
    assert_eq!(
        calls[3],
        GitCall::Checkout {
            dir: PathBuf::from("/tmp/x"),
            reference: "scaffolder".to_string(),
        }
    );
}

#[tokio::test]
async fn test_existing_local_branch_is_checked_out_without_creating() {
    let git = RecordingGit::new()
        .on_branch("main")
        .with_local_branch("scaffolder");
    let options = PublishOptions::new("/tmp/x", "Update scaffold");

    commit_and_push_branch(&git, &options).await.unwrap();

    assert_eq!(
        git.call_names(),
        vec![
            "current_branch",
            "branch_exists",
            "checkout",
            "add",
            "commit",
            "push"
        ]
    );
}

#[tokio::test]
async fn test_detached_head_creates_branch() {
    let git = RecordingGit::new();
    let options = PublishOptions::new("/tmp/x", "Initial scaffold");

    commit_and_push_branch(&git, &options).await.unwrap();

    assert!(git.call_names().contains(&"branch"));
}

#[tokio::test]
async fn test_stages_whole_tree_and_pushes_qualified_ref() {
    let git = RecordingGit::new().on_branch("scaffolder");
    let options = PublishOptions::new("/work/service", "Initial scaffold");

    commit_and_push_branch(&git, &options).await.unwrap();

    let calls = git.calls();
    assert!(calls.contains(&GitCall::Add {
        dir: PathBuf::from("/work/service"),
        filepath: ".".to_string(),
    }));
    assert_eq!(
        calls.last(),
        Some(&GitCall::Push {
            dir: PathBuf::from("/work/service"),
            remote: "origin".to_string(),
            remote_ref: "refs/heads/scaffolder".to_string(),
        })
    );
}

#[tokio::test]
async fn test_custom_remote_and_branch() {
    let git = RecordingGit::new().on_branch("feature/templates");
    let options = PublishOptions::new("/tmp/x", "msg")
        .with_remote("upstream")
        .with_branch("feature/templates");

    commit_and_push_branch(&git, &options).await.unwrap();

    assert_eq!(
        git.calls().last(),
        Some(&GitCall::Push {
            dir: PathBuf::from("/tmp/x"),
            remote: "upstream".to_string(),
            remote_ref: "refs/heads/feature/templates".to_string(),
        })
    );
}

#[tokio::test]
async fn test_default_identity_used_as_author_and_committer() {
    let git = RecordingGit::new().on_branch("scaffolder");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold");

    commit_and_push_branch(&git, &options).await.unwrap();

    let (message, author, committer) = commit_of(&git);
    let expected = Signature {
        name: "Scaffolder".to_string(),
        email: "scaffolder@backstage.io".to_string(),
    };
    assert_eq!(message, "Initial scaffold");
    assert_eq!(author, expected);
    assert_eq!(committer, expected);
}

#[tokio::test]
async fn test_partial_identity_is_completed_with_defaults() {
    let git = RecordingGit::new().on_branch("scaffolder");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold").with_author(AuthorInfo {
        name: Some("Jane Doe".to_string()),
        email: None,
    });

    commit_and_push_branch(&git, &options).await.unwrap();

    let (_, author, committer) = commit_of(&git);
    assert_eq!(author.name, "Jane Doe");
    assert_eq!(author.email, DEFAULT_AUTHOR_EMAIL);
    assert_eq!(committer, author);
}

#[tokio::test]
async fn test_full_identity_is_used_verbatim() {
    let git = RecordingGit::new().on_branch("scaffolder");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold")
        .with_author(AuthorInfo::new("Jane Doe", "jane@example.com"));

    commit_and_push_branch(&git, &options).await.unwrap();

    let (_, author, _) = commit_of(&git);
    assert_ne!(author.name, DEFAULT_AUTHOR_NAME);
    assert_eq!(author.email, "jane@example.com");
}

#[tokio::test]
async fn test_commit_failure_skips_push() {
    let git = RecordingGit::new()
        .on_branch("scaffolder")
        .failing_on("commit");
    let options = PublishOptions::new("/tmp/x", "Nothing changed");

    let err = commit_and_push_branch(&git, &options).await.unwrap_err();

    assert!(matches!(
        err,
        Error::VersionControl {
            operation: "commit",
            ..
        }
    ));
    assert_eq!(git.call_names(), vec!["current_branch", "add", "commit"]);
}

#[tokio::test]
async fn test_push_rejection_is_returned_without_retry() {
    let git = RecordingGit::new()
        .on_branch("scaffolder")
        .failing_on("push");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold");

    let err = commit_and_push_branch(&git, &options).await.unwrap_err();

    assert!(matches!(
        err,
        Error::VersionControl {
            operation: "push",
            ..
        }
    ));
    let pushes = git
        .call_names()
        .into_iter()
        .filter(|name| *name == "push")
        .count();
    assert_eq!(pushes, 1);
}

#[tokio::test]
async fn test_branch_creation_failure_stops_workflow() {
    let git = RecordingGit::new().on_branch("main").failing_on("branch");
    let options = PublishOptions::new("/tmp/x", "Initial scaffold");

    assert!(commit_and_push_branch(&git, &options).await.is_err());
    assert_eq!(
        git.call_names(),
        vec!["current_branch", "branch_exists", "branch"]
    );
}
