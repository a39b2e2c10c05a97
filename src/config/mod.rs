//! Configuration management module

pub mod builder;
pub mod loader;
pub mod validation;

pub use builder::PublishConfigBuilder;
pub use loader::{
    PublishConfig, PublishSettings, PullRequestSettings, RepositorySettings, qualify_branch,
};
pub use validation::ValidationError;
