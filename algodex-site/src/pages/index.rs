//! Landing page: category cards and the pattern collection teaser

use crate::page::{wrap_in_document, SiteMeta, Theme};
use algodex_catalog::Catalog;
use algodex_highlight::escape;

pub fn render(catalog: &Catalog, meta: &SiteMeta, theme: Theme) -> String {
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>\n", escape(&meta.title)));
    body.push_str(&format!(
        "<p class=\"tagline\">{}</p>\n",
        escape(&meta.tagline)
    ));

    body.push_str("<h2>Browse by category</h2>\n<div class=\"card-grid\">\n");
    for category in catalog.categories() {
        let count = catalog.algorithms_in(&category.id).len();
        body.push_str(&format!(
            "  <div class=\"card\">\n    \
             <h3><a href=\"algorithms/index.html#{id}\">{name}</a></h3>\n    \
             <p>{description}</p>\n    \
             <p><span class=\"badge\">{count} algorithms</span></p>\n  </div>\n",
            id = escape(&category.id),
            name = escape(&category.name),
            description = escape(&category.description),
        ));
    }
    body.push_str("</div>\n");

    body.push_str("<h2>Coding patterns</h2>\n<div class=\"card-grid\">\n");
    for pattern in catalog.patterns_by_number() {
        body.push_str(&format!(
            "  <div class=\"card\">\n    \
             <h3><a href=\"patterns/{id}.html\">{number}. {title}</a></h3>\n    \
             <p><span class=\"badge\">{difficulty}</span>\
             <span class=\"badge\">{time}</span></p>\n    \
             <p>{description}</p>\n  </div>\n",
            id = escape(&pattern.id),
            number = pattern.number,
            title = escape(&pattern.title),
            difficulty = pattern.difficulty,
            time = escape(&pattern.time_complexity),
            description = escape(&pattern.description),
        ));
    }
    body.push_str("</div>\n");

    wrap_in_document(meta, theme, "Home", "", &body)
}
