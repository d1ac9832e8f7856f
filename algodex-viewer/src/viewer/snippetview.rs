//! Token-stream-driven snippet rendering for the terminal
//!
//! Maps each highlighter token category to a terminal style and folds the
//! classified stream into ratatui lines. Tokens may span line breaks (a
//! string literal can), so spans are split on newlines while keeping their
//! style.

use algodex_highlight::{scan, TokenKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Terminal style for one token category
pub fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::String => Style::default().fg(Color::Green),
        TokenKind::Comment => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        TokenKind::Keyword => Style::default().fg(Color::Magenta),
        TokenKind::Number => Style::default().fg(Color::Yellow),
        TokenKind::Function => Style::default().fg(Color::Blue),
        TokenKind::Plain => Style::default(),
    }
}

/// Render snippet source into styled terminal lines
pub fn highlight_lines(code: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (kind, range) in scan(code) {
        let style = token_style(kind);
        let mut parts = code[range].split('\n');

        if let Some(first) = parts.next() {
            if !first.is_empty() {
                spans.push(Span::styled(first.to_string(), style));
            }
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut spans)));
            if !part.is_empty() {
                spans.push(Span::styled(part.to_string(), style));
            }
        }
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_matches_source() {
        let code = "int x = 0;\n// comment\nfoo(1);\n";
        let lines = highlight_lines(code);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_keyword_gets_styled_span() {
        let lines = highlight_lines("int x;");
        let styled: Vec<_> = lines[0]
            .spans
            .iter()
            .filter(|s| s.style == token_style(TokenKind::Keyword))
            .collect();
        assert_eq!(styled.len(), 1);
        assert_eq!(styled[0].content, "int");
    }

    #[test]
    fn test_multiline_string_keeps_style_on_both_lines() {
        let lines = highlight_lines("\"first\nsecond\"");
        assert_eq!(lines.len(), 2);
        let string_style = token_style(TokenKind::String);
        assert!(lines[0].spans.iter().any(|s| s.style == string_style));
        assert!(lines[1].spans.iter().any(|s| s.style == string_style));
    }

    #[test]
    fn test_empty_source_renders_nothing() {
        assert!(highlight_lines("").is_empty());
    }
}
