// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Thin layer over git2: open the repository in the current directory, check
//! the index for staged entries and commit it.

pub mod commands;
mod repo;

pub use commands::create_commit;
pub use repo::{staged_mask, Repository};
