//! Markup rendering of classified token streams
//!
//! Each classified token is rendered exactly once: plain text is emitted
//! escaped but unwrapped, every other category is escaped and wrapped in a
//! `<span>` carrying its style class. The renderer never inspects or
//! re-scans markup it has already produced.
//!
//! Escaping contract: snippet text is untrusted. Any character of the
//! original source that is significant to the output markup (`&`, `<`, `>`)
//! is neutralized before wrapping, so no snippet can smuggle structural
//! markup into a page.

use crate::classify::scan;
use crate::snippet::CodeSnippet;

/// Escape markup-significant characters of snippet text
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render source text to an HTML fragment
///
/// Total and deterministic: any input is accepted, empty input yields empty
/// output, and stripping the inserted tags and unescaping reproduces the
/// input exactly.
pub fn to_html(source: &str) -> String {
    let mut html = String::with_capacity(source.len() + source.len() / 2);

    for (kind, span) in scan(source) {
        let text = &source[span];
        match kind.class_name() {
            Some(class) => {
                html.push_str("<span class=\"");
                html.push_str(class);
                html.push_str("\">");
                html.push_str(&escape(text));
                html.push_str("</span>");
            }
            None => html.push_str(&escape(text)),
        }
    }

    html
}

/// Render a snippet's code to an HTML fragment
///
/// The snippet's language tag and title are display metadata for the caller;
/// only one lexical rule set (C-family) is defined, so they do not affect
/// the markup produced here.
pub fn highlight(snippet: &CodeSnippet) -> String {
    to_html(&snippet.code)
}
