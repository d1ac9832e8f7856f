//! Content-level checks over the embedded catalogue
//!
//! These guard the data files themselves: the records must load, resolve,
//! and carry snippets the highlighter actually gets traction on.

use algodex_catalog::{Catalog, Difficulty};
use algodex_highlight::{scan, TokenKind};

#[test]
fn test_catalog_covers_every_category() {
    let catalog = Catalog::load().unwrap();
    for category in catalog.categories() {
        assert!(
            !catalog.algorithms_in(&category.id).is_empty(),
            "category '{}' has no algorithms",
            category.id
        );
    }
}

#[test]
fn test_every_snippet_produces_highlighted_tokens() {
    let catalog = Catalog::load().unwrap();

    let snippets = catalog
        .algorithms()
        .iter()
        .map(|a| &a.snippet)
        .chain(catalog.patterns().iter().map(|p| &p.snippet))
        .chain(catalog.syntax_sections().iter().flat_map(|s| &s.blocks));

    for snippet in snippets {
        let wrapped = scan(&snippet.code)
            .into_iter()
            .filter(|(kind, _)| *kind != TokenKind::Plain)
            .count();
        assert!(
            wrapped > 0,
            "snippet {:?} has no classifiable tokens",
            snippet.title
        );
    }
}

#[test]
fn test_os_algorithms_carry_declared_subcategories() {
    let catalog = Catalog::load().unwrap();
    let os = catalog.category("os").unwrap();
    for algorithm in catalog.algorithms_in("os") {
        let subcategory = algorithm
            .subcategory
            .as_ref()
            .expect("os algorithms are grouped by subcategory");
        assert!(os.subcategories.contains(subcategory));
    }
}

#[test]
fn test_pattern_collection_is_consistent() {
    let catalog = Catalog::load().unwrap();
    for pattern in catalog.patterns() {
        assert!(pattern.number >= 1);
        assert!(!pattern.when_to_use.is_empty());
        assert!(!pattern.problems.is_empty());
    }
    // The collection opens with the canonical first pattern
    let first = catalog.patterns_by_number()[0];
    assert_eq!(first.id, "sliding-window");
    assert_eq!(first.difficulty, Difficulty::Medium);
}

#[test]
fn test_snippet_titles_look_like_filenames() {
    let catalog = Catalog::load().unwrap();
    for algorithm in catalog.algorithms() {
        let title = algorithm.snippet.title.as_deref().unwrap_or_default();
        assert!(
            title.ends_with(".cpp"),
            "algorithm '{}' snippet title '{}' is not a .cpp filename",
            algorithm.id,
            title
        );
    }
}
