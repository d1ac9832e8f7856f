//! Pattern index and detail pages

use crate::page::{code_block, wrap_in_document, SiteMeta, Theme};
use algodex_catalog::{Catalog, Pattern};
use algodex_highlight::escape;

/// The pattern index: the numbered collection as cards
pub fn render_index(catalog: &Catalog, meta: &SiteMeta, theme: Theme) -> String {
    let mut body = String::from(
        "<h1>Coding Patterns</h1>\n\
         <p class=\"tagline\">Reusable problem-solving templates, numbered in study order.</p>\n\
         <div class=\"card-grid\">\n",
    );

    for pattern in catalog.patterns_by_number() {
        body.push_str(&format!(
            "  <div class=\"card\">\n    \
             <h3><a href=\"{id}.html\">{number}. {title}</a></h3>\n    \
             <p><span class=\"badge\">{difficulty}</span>\
             <span class=\"badge\">{time}</span>\
             <span class=\"badge\">{space}</span></p>\n    \
             <p>{description}</p>\n  </div>\n",
            id = escape(&pattern.id),
            number = pattern.number,
            title = escape(&pattern.title),
            difficulty = pattern.difficulty,
            time = escape(&pattern.time_complexity),
            space = escape(&pattern.space_complexity),
            description = escape(&pattern.description),
        ));
    }
    body.push_str("</div>\n");

    wrap_in_document(meta, theme, "Patterns", "../", &body)
}

/// One pattern's detail page: theory, analogy, use cases, template code,
/// and practice problems
pub fn render_detail(pattern: &Pattern, meta: &SiteMeta, theme: Theme) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<h1>{number}. {title}</h1>\n",
        number = pattern.number,
        title = escape(&pattern.title),
    ));
    body.push_str(&format!(
        "<p><span class=\"badge\">{difficulty}</span></p>\n",
        difficulty = pattern.difficulty,
    ));
    body.push_str(&format!("<p>{}</p>\n", escape(&pattern.description)));
    body.push_str(&format!(
        "<div class=\"complexity-row\">\
         <span>Time: {time}</span><span>Space: {space}</span></div>\n",
        time = escape(&pattern.time_complexity),
        space = escape(&pattern.space_complexity),
    ));

    body.push_str("<h2>Theory</h2>\n");
    body.push_str(&format!("<p>{}</p>\n", escape(&pattern.theory)));
    body.push_str(&format!(
        "<blockquote class=\"analogy\">{}</blockquote>\n",
        escape(&pattern.analogy)
    ));

    body.push_str("<h2>When to use it</h2>\n<ul class=\"uses\">\n");
    for use_case in &pattern.when_to_use {
        body.push_str(&format!("  <li>{}</li>\n", escape(use_case)));
    }
    body.push_str("</ul>\n");

    body.push_str("<h2>Template</h2>\n");
    body.push_str(&code_block(&pattern.snippet));
    body.push('\n');
    body.push_str(&format!("<p>{}</p>\n", escape(&pattern.syntax_notes)));

    body.push_str("<h2>Practice problems</h2>\n<ul class=\"uses\">\n");
    for problem in &pattern.problems {
        body.push_str(&format!(
            "  <li>{name} <span class=\"badge\">{difficulty}</span></li>\n",
            name = escape(&problem.name),
            difficulty = problem.difficulty,
        ));
    }
    body.push_str("</ul>\n");

    wrap_in_document(meta, theme, &pattern.title, "../", &body)
}
