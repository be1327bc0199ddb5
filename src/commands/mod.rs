//! CLI command wrappers
//!
//! Thin layer between clap and the rule pipelines: owns the tree/commit
//! lifecycle and acts as the host for deferred package-install tasks. The
//! project root is resolved once, up front, and handed to the commands.

pub mod add;
pub mod completions;
pub mod remove;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, TailgraftError};

pub(crate) fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| TailgraftError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
