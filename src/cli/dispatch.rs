// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit flow: prompts, confirmation, commit.

use crate::config::CmtConfig;
use crate::error::{CmtError, Result};
use crate::git::{self, Repository};
use crate::prompt::{confirm, open_editor, PromptController};

use console::style;

use super::args::Cli;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        CmtConfig::load_from(config_path)?
    } else {
        CmtConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let vocabulary = config.vocabulary();
    let mut editor = open_editor();

    let message = PromptController::new(&vocabulary, &config.prompt).collect(editor.as_mut())?;
    tracing::debug!("Composed message: {:?}", message);

    if !confirm(editor.as_mut())? {
        return Err(CmtError::Declined);
    }

    let repo = Repository::open_current()?;
    let id = git::create_commit(&repo, &message.prettified(), || {
        println!("HEAD not found. Creating first commit");
    })?;

    println!(
        "{}",
        style(format!("Changes committed: {}", id)).green()
    );

    Ok(())
}
