//! Record types for catalogue content
//!
//! These are plain data carriers deserialized from the embedded YAML files.
//! Snippet text inside them is untrusted plain text; it is only ever passed
//! to the highlighter, never interpreted.

use algodex_highlight::CodeSnippet;
use serde::{Deserialize, Serialize};

/// A top-level grouping of algorithm entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Icon name used by the presentation layer
    pub icon: String,
    pub description: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

/// One algorithm entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Algorithm {
    pub id: String,
    pub name: String,
    /// Id of the owning [Category]
    pub category: String,
    /// Subcategory name, present only for categories that declare them
    #[serde(default)]
    pub subcategory: Option<String>,
    pub description: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub snippet: CodeSnippet,
    pub theory: String,
    pub steps: Vec<String>,
}

/// Problem difficulty scale used by patterns and practice problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A practice problem referenced by a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeProblem {
    pub name: String,
    pub difficulty: Difficulty,
}

/// One entry of the numbered coding-pattern collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    /// Position in the collection; unique across all patterns
    pub number: u32,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub time_complexity: String,
    pub space_complexity: String,
    /// Icon name used by the presentation layer
    pub icon: String,
    pub theory: String,
    pub analogy: String,
    pub when_to_use: Vec<String>,
    pub snippet: CodeSnippet,
    pub syntax_notes: String,
    pub problems: Vec<PracticeProblem>,
}

/// One section of the C++ syntax guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxSection {
    pub id: String,
    pub title: String,
    pub intro: String,
    pub blocks: Vec<CodeSnippet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(format!("{}", Difficulty::Easy), "Easy");
        assert_eq!(format!("{}", Difficulty::Hard), "Hard");
    }

    #[test]
    fn test_category_subcategories_default_to_empty() {
        let category: Category = serde_yaml::from_str(
            "id: sorting\nname: Sorting Algorithms\nicon: ArrowUpDown\ndescription: Order things\n",
        )
        .unwrap();
        assert!(category.subcategories.is_empty());
    }

    #[test]
    fn test_snippet_language_defaults_in_yaml() {
        let algorithm: Algorithm = serde_yaml::from_str(
            "\
id: demo
name: Demo
category: sorting
description: d
time_complexity: O(n)
space_complexity: O(1)
snippet:
  title: demo.cpp
  code: |
    int main() { return 0; }
theory: t
steps:
  - one
",
        )
        .unwrap();
        assert_eq!(algorithm.snippet.language, "cpp");
        assert_eq!(algorithm.snippet.title.as_deref(), Some("demo.cpp"));
    }
}
