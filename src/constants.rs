//! Central constants for scaffold-publish

/// Default values for Git operations
pub mod git {
    /// Remote name used when none is given
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Branch checked out after cloning when none is given
    pub const DEFAULT_CLONE_BRANCH: &str = "main";

    /// Branch generated content is published to when none is given
    pub const DEFAULT_PUBLISH_BRANCH: &str = "scaffolder";

    /// Author and committer name used when the caller supplies none
    pub const DEFAULT_AUTHOR_NAME: &str = "Scaffolder";

    /// Author and committer email used when the caller supplies none
    pub const DEFAULT_AUTHOR_EMAIL: &str = "scaffolder@backstage.io";

    /// Prefix of fully qualified branch references
    pub const BRANCH_REF_PREFIX: &str = "refs/heads/";
}

/// Default values for Azure DevOps operations
pub mod ado {
    /// Service base URL; the organization name is appended verbatim
    pub const BASE_URL: &str = "https://dev.azure.com/";
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "publish.yaml";
}

/// Environment variables read by the command line front end
pub mod env {
    pub const GIT_TOKEN: &str = "GIT_TOKEN";
    pub const GIT_USERNAME: &str = "GIT_USERNAME";
    pub const GIT_PASSWORD: &str = "GIT_PASSWORD";
    pub const ADO_TOKEN: &str = "AZURE_DEVOPS_TOKEN";
}
