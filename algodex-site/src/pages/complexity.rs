//! Complexity reference: one table over the whole algorithm catalogue
//!
//! A plain lookup table; there is no curve plotting here.

use crate::page::{wrap_in_document, SiteMeta, Theme};
use algodex_catalog::Catalog;
use algodex_highlight::escape;

pub fn render(catalog: &Catalog, meta: &SiteMeta, theme: Theme) -> String {
    let mut body = String::from(
        "<h1>Complexity Reference</h1>\n\
         <p class=\"tagline\">Time and space costs of every algorithm in the catalogue.</p>\n\
         <table class=\"reference\">\n\
         <thead><tr><th>Algorithm</th><th>Category</th><th>Time</th><th>Space</th></tr></thead>\n\
         <tbody>\n",
    );

    for category in catalog.categories() {
        for algorithm in catalog.algorithms_in(&category.id) {
            body.push_str(&format!(
                "  <tr><td><a href=\"../algorithms/{id}.html\">{name}</a></td>\
                 <td>{category}</td><td>{time}</td><td>{space}</td></tr>\n",
                id = escape(&algorithm.id),
                name = escape(&algorithm.name),
                category = escape(&category.name),
                time = escape(&algorithm.time_complexity),
                space = escape(&algorithm.space_complexity),
            ));
        }
    }
    body.push_str("</tbody>\n</table>\n");

    wrap_in_document(meta, theme, "Complexity", "../", &body)
}
