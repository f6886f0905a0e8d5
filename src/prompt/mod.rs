// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Interactive prompts: commit type, title, description and confirmation.

pub mod completion;
mod confirm;
pub mod editor;

use crate::commit::{title_prefix, truncate_chars, CommitMessage};
use crate::config::{PromptConfig, Vocabulary};
use crate::error::{CmtError, Result};
use std::io;

pub use completion::{complete, render_matches, Completed, TypeCompleter};
pub use confirm::{confirm, confirm_prompt, is_accepted};
pub use editor::{open_editor, LineEditor, PlainEditor, TerminalEditor};

const TYPE_PROMPT: &str = "Type of change";
const TITLE_PROMPT: &str = "The title of your commit";
const SUMMARY_PROMPT: &str = "Describe your changes";

/// Collects a commit message from the user.
pub struct PromptController<'a> {
    vocabulary: &'a Vocabulary,
    limits: &'a PromptConfig,
}

impl<'a> PromptController<'a> {
    /// Create a controller over a vocabulary and prompt limits.
    pub fn new(vocabulary: &'a Vocabulary, limits: &'a PromptConfig) -> Self {
        Self { vocabulary, limits }
    }

    /// Ask for type, title and description.
    pub fn collect(&self, editor: &mut dyn LineEditor) -> Result<CommitMessage> {
        let title = self.read_title(editor)?;
        let summary = self.read_summary(editor)?;
        Ok(CommitMessage::new(title, summary))
    }

    /// Read the type with completion, then let the user finish the title
    /// after the `"<type>: "` prefix.
    pub fn read_title(&self, editor: &mut dyn LineEditor) -> Result<String> {
        let commit_type = required(editor.read_type(TYPE_PROMPT, self.vocabulary), "type")?;
        if self.vocabulary.get(commit_type.trim_end_matches(' ')).is_none() {
            tracing::debug!("'{}' is not a known commit type", commit_type);
        }

        let prefix = title_prefix(&commit_type);
        let title = required(editor.read_line(TITLE_PROMPT, &prefix), "title")?;
        Ok(truncate_chars(&title, self.limits.max_title_length))
    }

    /// Read the free-text description. Empty is fine.
    pub fn read_summary(&self, editor: &mut dyn LineEditor) -> Result<String> {
        let summary = required(editor.read_line(SUMMARY_PROMPT, ""), "summary")?;
        Ok(truncate_chars(&summary, self.limits.max_summary_length))
    }
}

fn required(result: io::Result<Option<String>>, prompt: &str) -> Result<String> {
    match result {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Err(CmtError::input(prompt)),
        Err(e) => {
            tracing::debug!("Reading {} failed: {}", prompt, e);
            Err(CmtError::input(prompt))
        }
    }
}
