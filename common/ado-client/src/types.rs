//! Pull request descriptor types
//!
//! These mirror the Git area's JSON contracts. Only the commonly used fields
//! are typed; anything else the caller sets (or the service returns) is kept
//! in `additional` and round-trips untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PullRequestStatus {
    NotSet,
    Active,
    Abandoned,
    Completed,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRefWithVote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_name: Option<String>,
    /// 10 approved, 5 approved with suggestions, 0 no vote, -5 waiting, -10 rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRef {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApiTagDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamProjectReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<TeamProjectReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequestCompletionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_source_branch: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squash_merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_work_items: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_policy: Option<bool>,
}

/// A Git pull request, used both as the creation payload and as the
/// service's response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitPullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_review_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PullRequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ref_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentityRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<GitRepositoryRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_options: Option<GitPullRequestCompletionOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<IdentityRefWithVote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_item_refs: Vec<ResourceRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<WebApiTagDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

impl GitPullRequest {
    /// Create a descriptor from fully qualified ref names
    pub fn new(
        source_ref_name: impl Into<String>,
        target_ref_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source_ref_name: Some(source_ref_name.into()),
            target_ref_name: Some(target_ref_name.into()),
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn as_draft(mut self) -> Self {
        self.is_draft = Some(true);
        self
    }

    pub fn with_reviewer(mut self, id: impl Into<String>) -> Self {
        self.reviewers.push(IdentityRefWithVote {
            id: Some(id.into()),
            ..Default::default()
        });
        self
    }

    pub fn with_work_item(mut self, id: impl Into<String>) -> Self {
        self.work_item_refs.push(ResourceRef {
            id: id.into(),
            url: None,
        });
        self
    }

    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        self.labels.push(WebApiTagDefinition {
            name: name.into(),
            ..Default::default()
        });
        self
    }
}
