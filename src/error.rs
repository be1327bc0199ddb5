//! Error types and handling for tailgraft
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tailgraft operations
#[derive(Error, Diagnostic, Debug)]
pub enum TailgraftError {
    #[error("Not an Angular project: {path}")]
    #[diagnostic(
        code(tailgraft::project::not_angular),
        help("Run tailgraft from an Angular workspace root (the directory containing angular.json)")
    )]
    NotAnAngularProject { path: String },

    // Tree errors
    #[error("File not found in tree: {path}")]
    #[diagnostic(code(tailgraft::tree::not_found))]
    FileNotFound { path: String },

    #[error("Path already exists in tree: {path}")]
    #[diagnostic(
        code(tailgraft::tree::already_exists),
        help("The tree refuses to create over an existing file; use overwrite instead")
    )]
    PathAlreadyExists { path: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(tailgraft::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(tailgraft::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tailgraft::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(tailgraft::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Malformed configuration in {path}: missing {detail}")]
    #[diagnostic(
        code(tailgraft::config::malformed),
        help("The document does not have the nested structure an Angular CLI workspace is expected to have")
    )]
    MalformedConfig { path: String, detail: String },
}

impl From<std::io::Error> for TailgraftError {
    fn from(err: std::io::Error) -> Self {
        TailgraftError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TailgraftError {
    fn from(err: serde_json::Error) -> Self {
        TailgraftError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for TailgraftError {
    fn from(err: inquire::InquireError) -> Self {
        TailgraftError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TailgraftError>;
