// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Tab-completion of commit type keywords.

use crate::config::{CommitKind, Vocabulary};
use console::{style, Term};
use dialoguer::Completion;

/// Result of completing a prefix against the vocabulary.
#[derive(Debug, PartialEq, Eq)]
pub enum Completed<'a> {
    /// Nothing starts with the prefix.
    NoMatch,
    /// Exactly one keyword starts with the prefix.
    Unique(&'a CommitKind),
    /// Several keywords start with the prefix, in vocabulary order.
    Ambiguous(Vec<&'a CommitKind>),
}

/// Match a prefix against the vocabulary.
pub fn complete<'a>(vocabulary: &'a Vocabulary, prefix: &str) -> Completed<'a> {
    let mut matches = vocabulary.matches(prefix);
    match matches.len() {
        0 => Completed::NoMatch,
        1 => Completed::Unique(matches.remove(0)),
        _ => Completed::Ambiguous(matches),
    }
}

/// One row per candidate: keyword right-aligned and highlighted, then its
/// description.
pub fn render_matches(matches: &[&CommitKind]) -> Vec<String> {
    let width = matches
        .iter()
        .map(|kind| kind.name.chars().count())
        .max()
        .unwrap_or(0);

    matches
        .iter()
        .map(|kind| {
            format!(
                "\t{} - {}",
                style(format!("{:>width$}", kind.name, width = width))
                    .magenta()
                    .for_stderr(),
                kind.description
            )
        })
        .collect()
}

/// Completion hook for the type prompt.
///
/// A unique match replaces the line. Several matches are listed below the
/// line, after which the prompt and the typed text are drawn again so editing
/// continues where it was. Each call searches the whole vocabulary.
///
/// The hook only sees the line, not the cursor, so the redraw leaves the
/// cursor at end of line. Completion is meant to be used there; Tab pressed
/// mid-line lists matches but later edits land at the wrong column. dialoguer
/// also calls the hook for ArrowRight at end of line, so the listing shows up
/// on that key too.
pub struct TypeCompleter<'a> {
    vocabulary: &'a Vocabulary,
    term: Term,
    prompt: String,
}

impl<'a> TypeCompleter<'a> {
    /// `prompt` is the already rendered prompt text, redrawn after a listing.
    pub fn new(vocabulary: &'a Vocabulary, term: Term, prompt: String) -> Self {
        Self {
            vocabulary,
            term,
            prompt,
        }
    }

    fn show(&self, matches: &[&CommitKind], input: &str) -> std::io::Result<()> {
        self.term.write_line("")?;
        for line in render_matches(matches) {
            self.term.write_line(&line)?;
        }
        self.term.write_str(&self.prompt)?;
        self.term.write_str(input)?;
        self.term.flush()
    }
}

impl Completion for TypeCompleter<'_> {
    fn get(&self, input: &str) -> Option<String> {
        match complete(self.vocabulary, input) {
            Completed::Unique(kind) => Some(kind.name.clone()),
            Completed::Ambiguous(matches) => {
                if let Err(e) = self.show(&matches, input) {
                    tracing::debug!("Failed to list completions: {}", e);
                }
                None
            }
            Completed::NoMatch => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Vocabulary;

    #[test]
    fn test_complete_unique() {
        let vocab = Vocabulary::default();
        match complete(&vocab, "re") {
            Completed::Unique(kind) => assert_eq!(kind.name, "refactor"),
            other => panic!("expected unique match, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_exact_keyword() {
        let vocab = Vocabulary::default();
        assert!(matches!(complete(&vocab, "chore"), Completed::Unique(k) if k.name == "chore"));
    }

    #[test]
    fn test_complete_ambiguous_keeps_order() {
        let vocab = Vocabulary::default();
        match complete(&vocab, "") {
            Completed::Ambiguous(matches) => {
                let names: Vec<_> = matches.iter().map(|k| k.name.as_str()).collect();
                assert_eq!(
                    names,
                    vec!["feat", "fix", "docs", "style", "refactor", "test", "chore"]
                );
            }
            other => panic!("expected ambiguous match, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_no_match() {
        let vocab = Vocabulary::default();
        assert_eq!(complete(&vocab, "z"), Completed::NoMatch);
        assert_eq!(complete(&vocab, "FEAT"), Completed::NoMatch);
    }

    #[test]
    fn test_repeated_completion_searches_full_vocabulary() {
        let vocab = Vocabulary::default();
        assert!(matches!(complete(&vocab, "f"), Completed::Ambiguous(m) if m.len() == 2));
        assert!(matches!(complete(&vocab, "t"), Completed::Unique(k) if k.name == "test"));
        assert!(matches!(complete(&vocab, "f"), Completed::Ambiguous(m) if m.len() == 2));
    }

    #[test]
    fn test_render_matches_right_aligns_keywords() {
        let vocab = Vocabulary::default();
        let rows: Vec<String> = render_matches(&vocab.matches("f"))
            .iter()
            .map(|row| console::strip_ansi_codes(row).into_owned())
            .collect();
        assert_eq!(
            rows,
            vec![
                "\tfeat - new feature for the user, not a new feature for build script",
                "\t fix - bug fix for the user, not a fix to a build script",
            ]
        );
    }

    #[test]
    fn test_completer_get() {
        let vocab = Vocabulary::default();
        let completer = TypeCompleter::new(&vocab, Term::stderr(), String::new());
        assert_eq!(completer.get("do"), Some("docs".to_string()));
        assert_eq!(completer.get("q"), None);
        assert_eq!(completer.get("f"), None);
    }
}
