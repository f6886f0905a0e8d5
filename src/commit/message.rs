// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and formatting.

/// Separator between the commit type and the title text.
pub const TYPE_SEPARATOR: &str = ": ";

/// Build the editable title prefix for a commit type.
///
/// Trailing spaces typed after the keyword are dropped so the prefix always
/// ends in exactly one `": "`.
pub fn title_prefix(commit_type: &str) -> String {
    let mut prefix = commit_type.trim_end_matches(' ').to_string();
    prefix.push_str(TYPE_SEPARATOR);
    prefix
}

/// Keep at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// A composed commit message: one title line and a free-text summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Title line, `"<type>: <text>"`.
    pub title: String,
    /// Description; may be empty.
    pub summary: String,
}

impl CommitMessage {
    /// Create a new commit message.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }

    /// Title, blank line, summary, trailing newline.
    pub fn format(&self) -> String {
        format!("{}\n\n{}\n", self.title, self.summary)
    }

    /// The formatted message cleaned up the way git does it.
    ///
    /// Only trailing whitespace and surplus blank lines change. Comment lines
    /// are kept. Falls back to [`CommitMessage::format`] when libgit2 refuses.
    pub fn prettified(&self) -> String {
        let raw = self.format();
        match git2::message_prettify(raw.as_str(), None) {
            Ok(pretty) => pretty,
            Err(e) => {
                tracing::debug!("message_prettify failed, using raw message: {}", e);
                raw
            }
        }
    }
}
