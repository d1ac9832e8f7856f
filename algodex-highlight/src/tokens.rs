//! Token definitions for the highlighting lexer
//!
//! This module defines the two token layers of the highlighter:
//!
//! ```text
//!     Raw Tokens:
//!         The scan alphabet, defined with the logos derive macro. The raw scan
//!         is total: every character of the input belongs to exactly one raw
//!         token. String literals and line comments are matched whole here,
//!         which is what makes their contents immune to keyword, number, and
//!         call-site rules later on.
//!
//!     Token Kinds:
//!         The closed set of presentation categories. Each raw token maps to
//!         exactly one kind during classification (see classify).
//! ```
use logos::Logos;

/// Raw scan tokens produced by the logos lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    /// A complete double-quoted literal, quotes included. The body may span
    /// lines but may not contain another double quote.
    #[regex(r#""[^"]*""#)]
    StringLit,

    /// A `//` comment running to the end of its line
    #[regex(r"//[^\n]*")]
    LineComment,

    /// An identifier: letters, digits, underscore, not starting with a digit
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    /// A maximal run starting with a digit. Only all-digit runs classify as
    /// numbers; something like `123abc` stays plain.
    #[regex(r"[0-9][A-Za-z0-9_]*")]
    DigitRun,

    #[token("(")]
    OpenParen,

    /// A lone double quote. An unterminated literal falls back to this token
    /// and the rest of the snippet is scanned as ordinary text.
    #[token("\"")]
    Quote,

    /// A lone slash (not part of a `//` comment marker)
    #[token("/")]
    Slash,

    /// Horizontal whitespace
    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,

    /// Catch-all run of characters not covered by any other pattern
    #[regex(r#"[^ \t\r\nA-Za-z0-9_"/(]+"#)]
    Symbols,
}

impl RawToken {
    /// Whitespace of any kind, including newlines
    pub fn is_spacing(&self) -> bool {
        matches!(self, RawToken::Whitespace | RawToken::Newline)
    }

    /// Tokens claimed whole at scan time (immune to later classification rules)
    pub fn is_claimed(&self) -> bool {
        matches!(self, RawToken::StringLit | RawToken::LineComment)
    }
}

/// The classification categories of the highlighter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// A double-quoted string literal, quotes included
    String,
    /// A line comment, marker included
    Comment,
    /// A reserved word of the language
    Keyword,
    /// A whole-word run of decimal digits
    Number,
    /// An identifier at a call site (the identifier only, not the parenthesis)
    Function,
    /// Everything else, passed through unwrapped
    Plain,
}

impl TokenKind {
    /// The style class carried by this category's wrapper tag, if any
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            TokenKind::String => Some("code-string"),
            TokenKind::Comment => Some("code-comment"),
            TokenKind::Keyword => Some("code-keyword"),
            TokenKind::Number => Some("code-number"),
            TokenKind::Function => Some("code-function"),
            TokenKind::Plain => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::String => write!(f, "string"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Keyword => write!(f, "keyword"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Function => write!(f, "function"),
            TokenKind::Plain => write!(f, "plain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn kinds(source: &str) -> Vec<RawToken> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(kinds(r#""hello""#), vec![RawToken::StringLit]);
    }

    #[test]
    fn test_string_literal_spanning_lines() {
        assert_eq!(kinds("\"a\nb\""), vec![RawToken::StringLit]);
    }

    #[test]
    fn test_unterminated_string_falls_back_to_quote() {
        assert_eq!(
            kinds("\"abc"),
            vec![RawToken::Quote, RawToken::Word]
        );
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            kinds("// note\nx"),
            vec![RawToken::LineComment, RawToken::Newline, RawToken::Word]
        );
    }

    #[test]
    fn test_lone_slash_is_not_a_comment() {
        assert_eq!(
            kinds("a / b"),
            vec![
                RawToken::Word,
                RawToken::Whitespace,
                RawToken::Slash,
                RawToken::Whitespace,
                RawToken::Word,
            ]
        );
    }

    #[test]
    fn test_word_and_digit_runs() {
        assert_eq!(
            kinds("foo 42 123abc _bar"),
            vec![
                RawToken::Word,
                RawToken::Whitespace,
                RawToken::DigitRun,
                RawToken::Whitespace,
                RawToken::DigitRun,
                RawToken::Whitespace,
                RawToken::Word,
            ]
        );
    }

    #[test]
    fn test_symbol_run() {
        assert_eq!(kinds("{};"), vec![RawToken::Symbols]);
    }

    #[test]
    fn test_comment_claims_quoted_text() {
        // The comment starts first and runs to end of line, so the quotes
        // inside it never become a string literal.
        assert_eq!(kinds("// say \"hi\""), vec![RawToken::LineComment]);
    }

    #[test]
    fn test_string_claims_comment_marker() {
        assert_eq!(kinds("\"http://x\""), vec![RawToken::StringLit]);
    }

    #[test]
    fn test_predicates() {
        assert!(RawToken::Whitespace.is_spacing());
        assert!(RawToken::Newline.is_spacing());
        assert!(!RawToken::Word.is_spacing());

        assert!(RawToken::StringLit.is_claimed());
        assert!(RawToken::LineComment.is_claimed());
        assert!(!RawToken::Symbols.is_claimed());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(TokenKind::String.class_name(), Some("code-string"));
        assert_eq!(TokenKind::Function.class_name(), Some("code-function"));
        assert_eq!(TokenKind::Plain.class_name(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", TokenKind::Keyword), "keyword");
        assert_eq!(format!("{}", TokenKind::Plain), "plain");
    }
}
