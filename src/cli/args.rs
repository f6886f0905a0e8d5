// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// cmt - conventional commit prompt
///
/// Asks for a commit type (Tab completes it), a title and a description,
/// then commits what is staged in the repository in the current directory.
#[derive(Parser, Debug)]
#[command(name = "cmt")]
#[command(author = "Eshan Roy")]
#[command(version, long_version = crate::version::long_version())]
#[command(about = "Conventional commit prompt", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CMT_CONFIG")]
    pub config: Option<PathBuf>,
}
