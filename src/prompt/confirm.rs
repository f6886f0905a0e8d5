// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The yes/no gate in front of the commit.

use crate::error::{CmtError, Result};
use console::style;

use super::editor::LineEditor;

/// Whether an answer lets the commit go ahead.
///
/// Only `n` and `N` decline. Any other character, and no character at all,
/// accepts.
pub fn is_accepted(answer: Option<char>) -> bool {
    !matches!(answer, Some('n') | Some('N'))
}

/// Render the gate prompt.
pub fn confirm_prompt() -> String {
    format!(
        "{}{}{}{}{}",
        style("Proceed? (").black().bright().for_stderr(),
        style("y").green().for_stderr(),
        style("/").black().bright().for_stderr(),
        style("N").red().for_stderr(),
        style(")").black().bright().for_stderr(),
    )
}

/// Ask for confirmation.
pub fn confirm(editor: &mut dyn LineEditor) -> Result<bool> {
    let answer = editor.read_char(&confirm_prompt()).map_err(|e| {
        tracing::debug!("Confirmation read failed: {}", e);
        CmtError::input("confirmation")
    })?;
    tracing::debug!("Confirmation answer: {:?}", answer);
    Ok(is_accepted(answer))
}
