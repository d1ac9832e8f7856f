//! The C++ syntax guide, all sections on one page

use crate::page::{code_block, wrap_in_document, SiteMeta, Theme};
use algodex_catalog::Catalog;
use algodex_highlight::escape;

pub fn render(catalog: &Catalog, meta: &SiteMeta, theme: Theme) -> String {
    let mut body = String::from(
        "<h1>C++ Syntax Guide</h1>\n\
         <p class=\"tagline\">The language features the reference implementations lean on.</p>\n",
    );

    for section in catalog.syntax_sections() {
        body.push_str(&format!(
            "<h2 id=\"{id}\">{title}</h2>\n<p>{intro}</p>\n",
            id = escape(&section.id),
            title = escape(&section.title),
            intro = escape(&section.intro),
        ));
        for block in &section.blocks {
            body.push_str(&code_block(block));
            body.push('\n');
        }
    }

    wrap_in_document(meta, theme, "C++ Syntax", "../", &body)
}
