//! Classification of the raw token stream into presentation categories
//!
//! This pass maps each raw token to exactly one [TokenKind], in stream order.
//! It consults the keyword vocabulary for words and a bounded lookahead for
//! call sites; it never looks inside a token's text except to check whether a
//! digit-led run is all digits. The output stream has the same spans as the
//! input stream, so span coverage of the source is preserved.

use crate::lexer::tokenize;
use crate::tokens::{RawToken, TokenKind};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::ops::Range;

/// Reserved words of the C-family rule set (case-sensitive)
pub static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "int", "void", "return", "for", "while", "if", "else", "class", "struct", "template",
        "typename", "const", "auto", "bool", "char", "double", "float", "long", "short",
        "unsigned", "signed", "static", "virtual", "override", "public", "private", "protected",
        "namespace", "using", "new", "delete", "nullptr", "true", "false", "this",
    ]
    .into_iter()
    .collect()
});

/// Classify a raw token stream produced from `source`
///
/// `source` must be the exact string the stream was tokenized from; spans are
/// carried over unchanged.
pub fn classify(
    source: &str,
    raw: &[(RawToken, Range<usize>)],
) -> Vec<(TokenKind, Range<usize>)> {
    let mut classified = Vec::with_capacity(raw.len());

    for (index, (token, span)) in raw.iter().enumerate() {
        let kind = match token {
            RawToken::StringLit => TokenKind::String,
            RawToken::LineComment => TokenKind::Comment,
            RawToken::Word => {
                let text = &source[span.clone()];
                if KEYWORDS.contains(text) {
                    TokenKind::Keyword
                } else if followed_by_open_paren(raw, index) {
                    TokenKind::Function
                } else {
                    TokenKind::Plain
                }
            }
            RawToken::DigitRun => {
                let text = &source[span.clone()];
                if text.bytes().all(|b| b.is_ascii_digit()) {
                    TokenKind::Number
                } else {
                    TokenKind::Plain
                }
            }
            _ => TokenKind::Plain,
        };
        classified.push((kind, span.clone()));
    }

    classified
}

/// Tokenize and classify in one step
pub fn scan(source: &str) -> Vec<(TokenKind, Range<usize>)> {
    let raw = tokenize(source);
    classify(source, &raw)
}

/// True if the next non-spacing token after `index` is an opening parenthesis.
/// Spacing includes newlines, so a call split across lines still counts.
fn followed_by_open_paren(raw: &[(RawToken, Range<usize>)], index: usize) -> bool {
    raw[index + 1..]
        .iter()
        .find(|(token, _)| !token.is_spacing())
        .is_some_and(|(token, _)| *token == RawToken::OpenParen)
}
