//! Common git utilities and shared helpers
//!
//! This module contains utilities shared by the clone and publish workflows.

use colored::*;
use std::path::Path;

/// Logger for git operations with consistent formatting
///
/// Each line is prefixed with the working directory's name in cyan/bold so
/// that output from several pipeline steps can be told apart.
///
/// ## Example
///
/// ```rust,no_run
/// use scaffold_publish::git::Logger;
/// use std::path::Path;
///
/// let logger = Logger::for_dir(Path::new("/tmp/work/my-service"));
/// logger.info("Cloning https://dev.azure.com/org/project/_git/my-service");
/// logger.success("Cloned");
/// ```
pub struct Logger {
    label: String,
}

impl Logger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Label output with the last component of `dir`
    pub fn for_dir(dir: &Path) -> Self {
        let label = dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());
        Self::new(label)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn info(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.green());
    }

    pub fn warn(&self, msg: &str) {
        println!("{} | {}", self.label.cyan().bold(), msg.yellow());
    }
}
