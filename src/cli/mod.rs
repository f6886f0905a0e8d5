// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for cmt.
//!
//! This module handles command-line argument parsing and runs the commit flow.

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::run;
