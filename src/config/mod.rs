// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmt.
//!
//! Handles loading and validating the optional cmt.toml, which carries the
//! commit type vocabulary and the prompt limits.

mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
