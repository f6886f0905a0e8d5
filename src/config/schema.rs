// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmt.toml.

use crate::error::{ConfigError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

lazy_static! {
    /// Shape of a conventional-commit type keyword.
    static ref KEYWORD_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9-]*$").unwrap();
}

/// The main configuration structure for cmt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CmtConfig {
    /// Prompt configuration.
    pub prompt: PromptConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,

    /// Commit type vocabulary, in completion order.
    pub types: Vec<CommitKind>,
}

impl Default for CmtConfig {
    fn default() -> Self {
        Self {
            prompt: PromptConfig::default(),
            ui: UiConfig::default(),
            types: default_types(),
        }
    }
}

impl CmtConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.max_title_length == 0 {
            return Err(invalid("prompt.max_title_length", "must be greater than zero").into());
        }
        if self.prompt.max_summary_length == 0 {
            return Err(invalid("prompt.max_summary_length", "must be greater than zero").into());
        }
        if self.types.is_empty() {
            return Err(invalid("types", "at least one commit type is required").into());
        }

        let mut seen = HashSet::new();
        for kind in &self.types {
            if !KEYWORD_REGEX.is_match(&kind.name) {
                return Err(invalid(
                    "types",
                    format!("'{}' is not a lowercase commit type keyword", kind.name),
                )
                .into());
            }
            if !seen.insert(kind.name.as_str()) {
                return Err(invalid("types", format!("duplicate commit type '{}'", kind.name)).into());
            }
        }

        Ok(())
    }

    /// Build the read-only vocabulary used by the type prompt.
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::new(self.types.clone())
    }
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Prompt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Maximum length of the composed title line, in characters.
    pub max_title_length: usize,

    /// Maximum length of the description, in characters.
    pub max_summary_length: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_title_length: 71,
            max_summary_length: 499,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// A commit type keyword and what it is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitKind {
    /// Keyword written before the colon.
    pub name: String,

    /// Short explanation shown next to completion candidates.
    pub description: String,
}

impl CommitKind {
    /// Create a new commit kind.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Default vocabulary, in completion order.
///
/// See <https://gist.github.com/joshbuchea/6f47e86d2510bce28f8e7f42ae84c716>.
pub fn default_types() -> Vec<CommitKind> {
    vec![
        CommitKind::new(
            "feat",
            "new feature for the user, not a new feature for build script",
        ),
        CommitKind::new("fix", "bug fix for the user, not a fix to a build script"),
        CommitKind::new("docs", "changes to the documentation"),
        CommitKind::new(
            "style",
            "formatting, missing semi colons, etc; no production code change",
        ),
        CommitKind::new(
            "refactor",
            "refactoring production code, eg. renaming a variable",
        ),
        CommitKind::new(
            "test",
            "adding missing tests, refactoring tests; no production code change",
        ),
        CommitKind::new("chore", "updating grunt tasks etc; no production code change"),
    ]
}

/// Ordered, immutable list of commit kinds.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    kinds: Vec<CommitKind>,
}

impl Vocabulary {
    /// Wrap a list of kinds. Order is preserved.
    pub fn new(kinds: Vec<CommitKind>) -> Self {
        Self { kinds }
    }

    /// Kinds whose keyword starts with `prefix`, case-sensitive, in order.
    ///
    /// The empty prefix yields every kind.
    pub fn matches(&self, prefix: &str) -> Vec<&CommitKind> {
        self.kinds
            .iter()
            .filter(|kind| kind.name.starts_with(prefix))
            .collect()
    }

    /// Look up a kind by exact keyword.
    pub fn get(&self, name: &str) -> Option<&CommitKind> {
        self.kinds.iter().find(|kind| kind.name == name)
    }

    /// All kinds, in order.
    pub fn kinds(&self) -> &[CommitKind] {
        &self.kinds
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(default_types())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(kinds: &[&CommitKind]) -> Vec<String> {
        kinds.iter().map(|k| k.name.clone()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = CmtConfig::default();
        assert_eq!(config.prompt.max_title_length, 71);
        assert_eq!(config.prompt.max_summary_length, 499);
        assert!(config.ui.color);
        assert_eq!(config.types.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_prefix_matches_everything_in_order() {
        let vocab = Vocabulary::default();
        assert_eq!(
            names(&vocab.matches("")),
            vec!["feat", "fix", "docs", "style", "refactor", "test", "chore"]
        );
    }

    #[test]
    fn test_prefix_matches() {
        let vocab = Vocabulary::default();
        assert_eq!(names(&vocab.matches("f")), vec!["feat", "fix"]);
        assert_eq!(names(&vocab.matches("fe")), vec!["feat"]);
        assert_eq!(names(&vocab.matches("refactor")), vec!["refactor"]);
        assert!(vocab.matches("x").is_empty());
        assert!(vocab.matches("feature").is_empty());
    }

    #[test]
    fn test_matches_are_case_sensitive() {
        let vocab = Vocabulary::default();
        assert!(vocab.matches("F").is_empty());
        assert!(vocab.matches("Docs").is_empty());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut config = CmtConfig::default();
        config.types.push(CommitKind::new("feat", "again"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_keywords() {
        for bad in ["", "Feat", "my type", "-x"] {
            let mut config = CmtConfig::default();
            config.types = vec![CommitKind::new(bad, "bad")];
            assert!(config.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_empty_vocabulary() {
        let mut config = CmtConfig::default();
        config.types.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_widths() {
        let mut config = CmtConfig::default();
        config.prompt.max_title_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = CmtConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("max_title_length"));
        assert!(toml_str.contains("[[types]]"));
    }
}
