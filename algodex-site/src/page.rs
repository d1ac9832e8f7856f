//! Document chrome shared by every generated page
//!
//! A page is rendered as body markup by one of the [pages](crate::pages)
//! modules, then wrapped into a complete HTML document here: doctype, head
//! with embedded CSS, top navigation, and footer. `root` is the relative
//! prefix back to the site root ("" for top-level pages, "../" for pages one
//! directory down); links are always relative so the tree can be served from
//! any path or opened straight from disk.

use algodex_highlight::{escape, highlight, CodeSnippet};

/// Color theme baked into each generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Site-wide display strings (from configuration)
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub title: String,
    pub tagline: String,
    pub footer: String,
}

/// Wrap body markup in a complete HTML document with embedded CSS
pub fn wrap_in_document(
    meta: &SiteMeta,
    theme: Theme,
    page_title: &str,
    root: &str,
    body: &str,
) -> String {
    let baseline_css = include_str!("../css/baseline.css");
    let theme_css = match theme {
        Theme::Dark => include_str!("../css/themes/theme-dark.css"),
        Theme::Light => include_str!("../css/themes/theme-light.css"),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="algodex-site">
  <title>{page_title} - {site_title}</title>
  <style>
{baseline_css}
{theme_css}
  </style>
</head>
<body>
{nav}
<main>
{body}
</main>
<footer class="sitefooter">{footer}</footer>
</body>
</html>"#,
        page_title = escape(page_title),
        site_title = escape(&meta.title),
        nav = nav(meta, root),
        footer = escape(&meta.footer),
    )
}

fn nav(meta: &SiteMeta, root: &str) -> String {
    let links = [
        ("Home", "index.html"),
        ("Algorithms", "algorithms/index.html"),
        ("Patterns", "patterns/index.html"),
        ("Syntax", "syntax/index.html"),
        ("Complexity", "complexity/index.html"),
    ];
    let mut nav = String::from("<nav class=\"topbar\">\n");
    nav.push_str(&format!(
        "  <span class=\"brand\">{}</span>\n",
        escape(&meta.title)
    ));
    for (label, href) in links {
        nav.push_str(&format!("  <a href=\"{root}{href}\">{label}</a>\n"));
    }
    nav.push_str("</nav>");
    nav
}

/// The code block component: optional title bar with language badge, then
/// the highlighted snippet in a scrollable pre
pub fn code_block(snippet: &CodeSnippet) -> String {
    let mut html = String::from("<div class=\"code-block\">\n");
    if let Some(title) = &snippet.title {
        html.push_str(&format!(
            "  <div class=\"code-block-header\">\
             <span class=\"code-block-title\">{}</span>\
             <span class=\"code-block-lang\">{}</span></div>\n",
            escape(title),
            escape(&snippet.language)
        ));
    }
    html.push_str("  <pre><code>");
    html.push_str(&highlight(snippet));
    html.push_str("</code></pre>\n</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> SiteMeta {
        SiteMeta {
            title: "AlgoDex".to_string(),
            tagline: "tagline".to_string(),
            footer: "footer <text>".to_string(),
        }
    }

    #[test]
    fn test_document_chrome() {
        let html = wrap_in_document(&meta(), Theme::Dark, "Algorithms", "../", "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Algorithms - AlgoDex</title>"));
        assert!(html.contains("<a href=\"../patterns/index.html\">Patterns</a>"));
        assert!(html.contains("<style>"));
        assert!(html.contains(".code-keyword"));
        // Footer text is untrusted and must be escaped
        assert!(html.contains("footer &lt;text&gt;"));
    }

    #[test]
    fn test_theme_selects_stylesheet() {
        let dark = wrap_in_document(&meta(), Theme::Dark, "t", "", "");
        let light = wrap_in_document(&meta(), Theme::Light, "t", "", "");
        assert!(dark.contains("background: #0f1117"));
        assert!(light.contains("background: #fcfcfd"));
    }

    #[test]
    fn test_code_block_without_title_has_no_header() {
        let block = code_block(&CodeSnippet::new("int x;"));
        assert!(!block.contains("code-block-header"));
        assert!(block.contains("<span class=\"code-keyword\">int</span>"));
    }

    #[test]
    fn test_code_block_title_and_language_are_escaped() {
        let mut snippet = CodeSnippet::with_title("x", "<evil>.cpp");
        snippet.language = "c&c".to_string();
        let block = code_block(&snippet);
        assert!(block.contains("&lt;evil&gt;.cpp"));
        assert!(block.contains("c&amp;c"));
    }
}
