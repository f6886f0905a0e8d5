// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmt - Conventional Commit Prompt
//!
//! Asks for a conventional-commit type, a title and a description, then
//! commits the staged changes of the repository in the current directory.
//!
//! # Features
//!
//! - **Tab-completed types**: the type prompt completes keywords from a
//!   configurable vocabulary and lists candidates when several match
//! - **Confirmation gate**: nothing is written unless the user lets it through
//! - **Index-only commits**: only staged changes are committed, on top of
//!   `HEAD` or as the first commit of a fresh repository
//!
//! # Example
//!
//! ```no_run
//! use cmt::config::CmtConfig;
//! use cmt::git::{create_commit, Repository};
//!
//! let config = CmtConfig::load().unwrap();
//! let repo = Repository::open_current().unwrap();
//! let id = create_commit(&repo, "chore: init\n", || println!("first commit")).unwrap();
//! println!("{} ({} types known)", id, config.vocabulary().kinds().len());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod prompt;

// Re-exports for convenience
pub use config::CmtConfig;
pub use error::{CmtError, Result};

/// Version information embedded at compile time.
pub mod version {
    use lazy_static::lazy_static;

    /// The current version of cmt.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    lazy_static! {
        static ref LONG_VERSION: String = version_string();
    }

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

    /// Version string for `--version`, computed once.
    pub fn long_version() -> &'static str {
        LONG_VERSION.as_str()
    }

}
