//! Raw tokenization of snippet source text
//!
//! This module is the entry point where source strings become raw token
//! streams. The scan must be total: concatenating the spans of the returned
//! tokens, in order, reconstructs the input exactly. Classification and
//! rendering operate on the stream produced here and never re-scan text.

use crate::tokens::RawToken;
use logos::Logos;

/// Tokenize snippet source with location information
///
/// Returns raw tokens paired with their byte ranges in `source`. Every byte
/// of the input is covered by exactly one returned span; a span the lexer
/// cannot match (a gap in the scan alphabet) degrades to a symbol run rather
/// than being dropped.
pub fn tokenize(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => tokens.push((RawToken::Symbols, lexer.span())),
        }
    }

    tokens
}
