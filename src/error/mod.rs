// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cmt.
//!
//! Every failure ends the run. The variants only differ in how they are
//! reported to the user; all of them map to the same non-zero exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmt operations.
#[derive(Error, Debug)]
pub enum CmtError {
    // A required prompt hit end-of-input or failed to read
    #[error("could not read {prompt}")]
    Input { prompt: String },

    // User answered "n" at the confirmation gate
    #[error("aborted!")]
    Declined,

    // No index-staged entries in the status list
    #[error("Nothing to commit!")]
    NothingToCommit,

    // Anything libgit2 reported
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),
}

impl From<dialoguer::Error> for CmtError {
    fn from(err: dialoguer::Error) -> Self {
        CmtError::Ui(err.to_string())
    }
}

impl From<git2::Error> for CmtError {
    fn from(err: git2::Error) -> Self {
        CmtError::Repository(err.into())
    }
}

impl CmtError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Build an input error for the named prompt.
    pub fn input(prompt: impl Into<String>) -> Self {
        CmtError::Input {
            prompt: prompt.into(),
        }
    }
}

/// A libgit2 failure, kept verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error: {code}/{class}: {message}")]
pub struct RepositoryError {
    /// Raw libgit2 error code (`GIT_ENOTFOUND` and friends).
    pub code: i32,
    /// Raw libgit2 error class.
    pub class: u32,
    /// Library message text.
    pub message: String,
}

impl From<git2::Error> for RepositoryError {
    fn from(err: git2::Error) -> Self {
        Self {
            code: err.raw_code(),
            class: err.raw_class(),
            message: err.message().to_string(),
        }
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for cmt operations.
pub type Result<T> = std::result::Result<T, CmtError>;
