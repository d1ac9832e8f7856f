//! Syntax highlighting core for C-family code snippets
//!
//! This crate turns a snippet of source text into marked-up text where each
//! classified token is wrapped in a category-specific tag. It is a pure,
//! total transform: any input string is accepted, every input character is
//! preserved (escaped where it would be markup-significant), and unrecognized
//! text passes through as plain text.
//!
//! Architecture
//!
//! The pipeline has three stages, each its own module:
//!
//! 1. Raw scan ([lexer]): a logos lexer splits the source into a total,
//!    non-overlapping stream of (RawToken, Span) pairs. String literals and
//!    line comments are claimed whole at this stage, so no later stage can
//!    ever match inside them.
//! 2. Classification ([classify]): a single pass over the raw stream maps
//!    each raw token to one of the six [TokenKind] categories, consulting
//!    the keyword vocabulary and a bounded lookahead for call sites.
//! 3. Rendering ([html]): each classified token is emitted exactly once,
//!    escaped, and wrapped if its category carries a style class.
//!
//! The file structure:
//!
//! ```text
//! .
//! ├── tokens.rs       # RawToken scan alphabet + TokenKind categories
//! ├── lexer.rs        # tokenize(): source -> raw token stream
//! ├── classify.rs     # classify()/scan(): raw stream -> token kinds
//! ├── html.rs         # escape()/to_html()/highlight(): kinds -> markup
//! ├── snippet.rs      # CodeSnippet record (code + display metadata)
//! └── lib.rs
//! ```
//!
//! Priority Order
//!
//! String literal > line comment > keyword > number > function call >
//! plain text. The first two are enforced structurally by the scan
//! (earliest match wins, claimed spans are never revisited); the rest are
//! decided per raw token during classification. There is no masking or
//! re-scanning of produced markup anywhere in the pipeline.

pub mod classify;
pub mod html;
pub mod lexer;
pub mod snippet;
pub mod tokens;

pub use classify::{classify, scan};
pub use html::{escape, highlight, to_html};
pub use lexer::tokenize;
pub use snippet::CodeSnippet;
pub use tokens::{RawToken, TokenKind};
