//! Algorithm index and detail pages

use crate::page::{code_block, wrap_in_document, SiteMeta, Theme};
use algodex_catalog::{Algorithm, Catalog};
use algodex_highlight::escape;

/// The algorithm index: every category as an anchored section listing its
/// entries with their complexities
pub fn render_index(catalog: &Catalog, meta: &SiteMeta, theme: Theme) -> String {
    let mut body = String::from("<h1>Algorithms</h1>\n");

    for category in catalog.categories() {
        body.push_str(&format!(
            "<h2 id=\"{id}\">{name}</h2>\n<p>{description}</p>\n",
            id = escape(&category.id),
            name = escape(&category.name),
            description = escape(&category.description),
        ));
        body.push_str("<div class=\"card-grid\">\n");
        for algorithm in catalog.algorithms_in(&category.id) {
            body.push_str(&format!(
                "  <div class=\"card\">\n    \
                 <h3><a href=\"{id}.html\">{name}</a></h3>\n    \
                 <p>{description}</p>\n    \
                 <p><span class=\"badge\">{time}</span>\
                 <span class=\"badge\">{space}</span></p>\n  </div>\n",
                id = escape(&algorithm.id),
                name = escape(&algorithm.name),
                description = escape(&algorithm.description),
                time = escape(&algorithm.time_complexity),
                space = escape(&algorithm.space_complexity),
            ));
        }
        body.push_str("</div>\n");
    }

    wrap_in_document(meta, theme, "Algorithms", "../", &body)
}

/// One algorithm's detail page: badges, highlighted implementation, theory,
/// and the step-by-step walkthrough
pub fn render_detail(
    catalog: &Catalog,
    algorithm: &Algorithm,
    meta: &SiteMeta,
    theme: Theme,
) -> String {
    let category_name = catalog
        .category(&algorithm.category)
        .map(|c| c.name.as_str())
        .unwrap_or(algorithm.category.as_str());

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", escape(&algorithm.name)));
    body.push_str(&format!(
        "<p><span class=\"badge\">{category}</span>{subcategory}</p>\n",
        category = escape(category_name),
        subcategory = algorithm
            .subcategory
            .as_ref()
            .map(|s| format!("<span class=\"badge\">{}</span>", escape(s)))
            .unwrap_or_default(),
    ));
    body.push_str(&format!("<p>{}</p>\n", escape(&algorithm.description)));
    body.push_str(&format!(
        "<div class=\"complexity-row\">\
         <span>Time: {time}</span><span>Space: {space}</span></div>\n",
        time = escape(&algorithm.time_complexity),
        space = escape(&algorithm.space_complexity),
    ));

    body.push_str("<h2>Implementation</h2>\n");
    body.push_str(&code_block(&algorithm.snippet));
    body.push('\n');

    body.push_str("<h2>How it works</h2>\n");
    body.push_str(&format!("<p>{}</p>\n", escape(&algorithm.theory)));

    body.push_str("<h2>Step by step</h2>\n<ol class=\"steps\">\n");
    for step in &algorithm.steps {
        body.push_str(&format!("  <li>{}</li>\n", escape(step)));
    }
    body.push_str("</ol>\n");

    wrap_in_document(meta, theme, &algorithm.name, "../", &body)
}
