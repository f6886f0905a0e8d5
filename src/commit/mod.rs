// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message composition.

mod message;

pub use message::{title_prefix, truncate_chars, CommitMessage, TYPE_SEPARATOR};
