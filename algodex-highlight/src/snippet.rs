//! The CodeSnippet record
//!
//! A snippet is raw source text plus display-only metadata. The text is
//! treated as untrusted plain data everywhere: it is only ever
//! pattern-matched and escaped, never executed or interpreted.

use serde::{Deserialize, Serialize};

/// A code snippet with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippet {
    /// The source text, verbatim
    pub code: String,
    /// Display label for the language badge. Only one lexical rule set
    /// (C-family) exists; the tag does not change highlighting behavior.
    #[serde(default = "default_language")]
    pub language: String,
    /// Optional display title (e.g. a file name)
    #[serde(default)]
    pub title: Option<String>,
}

fn default_language() -> String {
    "cpp".to_string()
}

impl CodeSnippet {
    pub fn new(code: impl Into<String>) -> Self {
        CodeSnippet {
            code: code.into(),
            language: default_language(),
            title: None,
        }
    }

    pub fn with_title(code: impl Into<String>, title: impl Into<String>) -> Self {
        CodeSnippet {
            code: code.into(),
            language: default_language(),
            title: Some(title.into()),
        }
    }
}
