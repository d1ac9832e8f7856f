//! Catalogue loading, validation, and lookup
//!
//! The YAML data files are embedded at compile time; `Catalog::load`
//! deserializes and cross-validates them. Validation failures are data bugs,
//! but they surface as `CatalogError` values so callers can report them
//! instead of panicking.

use crate::records::{Algorithm, Category, Pattern, SyntaxSection};
use std::collections::HashSet;
use std::fmt;

const CATEGORIES_YAML: &str = include_str!("data/categories.yaml");
const ALGORITHMS_YAML: &str = include_str!("data/algorithms.yaml");
const PATTERNS_YAML: &str = include_str!("data/patterns.yaml");
const SYNTAX_YAML: &str = include_str!("data/syntax.yaml");

/// Errors raised while loading or validating the catalogue
#[derive(Debug)]
pub enum CatalogError {
    /// A data file failed to deserialize
    Parse { file: &'static str, message: String },
    /// An entry repeats an id within its collection
    DuplicateId(String),
    /// A pattern repeats another pattern's number
    DuplicateNumber(u32),
    /// An algorithm references a category id that does not exist
    UnknownCategory { algorithm: String, category: String },
    /// An algorithm names a subcategory its category does not declare
    UnknownSubcategory { algorithm: String, subcategory: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse { file, message } => {
                write!(f, "Failed to parse {file}: {message}")
            }
            CatalogError::DuplicateId(id) => write!(f, "Duplicate catalogue id '{id}'"),
            CatalogError::DuplicateNumber(number) => {
                write!(f, "Duplicate pattern number {number}")
            }
            CatalogError::UnknownCategory {
                algorithm,
                category,
            } => write!(
                f,
                "Algorithm '{algorithm}' references unknown category '{category}'"
            ),
            CatalogError::UnknownSubcategory {
                algorithm,
                subcategory,
            } => write!(
                f,
                "Algorithm '{algorithm}' references undeclared subcategory '{subcategory}'"
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The complete, validated content catalogue
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    algorithms: Vec<Algorithm>,
    patterns: Vec<Pattern>,
    syntax_sections: Vec<SyntaxSection>,
}

impl Catalog {
    /// Deserialize and validate the embedded content
    pub fn load() -> Result<Catalog, CatalogError> {
        let categories: Vec<Category> = parse("categories.yaml", CATEGORIES_YAML)?;
        let algorithms: Vec<Algorithm> = parse("algorithms.yaml", ALGORITHMS_YAML)?;
        let patterns: Vec<Pattern> = parse("patterns.yaml", PATTERNS_YAML)?;
        let syntax_sections: Vec<SyntaxSection> = parse("syntax.yaml", SYNTAX_YAML)?;

        let catalog = Catalog {
            categories,
            algorithms,
            patterns,
            syntax_sections,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        check_unique_ids(self.categories.iter().map(|c| c.id.as_str()))?;
        check_unique_ids(self.algorithms.iter().map(|a| a.id.as_str()))?;
        check_unique_ids(self.patterns.iter().map(|p| p.id.as_str()))?;
        check_unique_ids(self.syntax_sections.iter().map(|s| s.id.as_str()))?;

        let mut numbers = HashSet::new();
        for pattern in &self.patterns {
            if !numbers.insert(pattern.number) {
                return Err(CatalogError::DuplicateNumber(pattern.number));
            }
        }

        for algorithm in &self.algorithms {
            let category = self.category(&algorithm.category).ok_or_else(|| {
                CatalogError::UnknownCategory {
                    algorithm: algorithm.id.clone(),
                    category: algorithm.category.clone(),
                }
            })?;
            if let Some(subcategory) = &algorithm.subcategory {
                if !category.subcategories.contains(subcategory) {
                    return Err(CatalogError::UnknownSubcategory {
                        algorithm: algorithm.id.clone(),
                        subcategory: subcategory.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn syntax_sections(&self) -> &[SyntaxSection] {
        &self.syntax_sections
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn algorithm(&self, id: &str) -> Option<&Algorithm> {
        self.algorithms.iter().find(|a| a.id == id)
    }

    pub fn pattern(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    /// All algorithms of one category, in data-file order
    pub fn algorithms_in(&self, category_id: &str) -> Vec<&Algorithm> {
        self.algorithms
            .iter()
            .filter(|a| a.category == category_id)
            .collect()
    }

    /// All patterns ordered by their collection number
    pub fn patterns_by_number(&self) -> Vec<&Pattern> {
        let mut patterns: Vec<&Pattern> = self.patterns.iter().collect();
        patterns.sort_by_key(|p| p.number);
        patterns
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    file: &'static str,
    source: &str,
) -> Result<T, CatalogError> {
    serde_yaml::from_str(source).map_err(|e| CatalogError::Parse {
        file,
        message: e.to_string(),
    })
}

fn check_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load().expect("embedded catalogue to validate");
        assert!(!catalog.categories().is_empty());
        assert!(!catalog.algorithms().is_empty());
        assert!(!catalog.patterns().is_empty());
        assert!(!catalog.syntax_sections().is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::load().unwrap();
        let algorithm = catalog.algorithm("bubble-sort").unwrap();
        assert_eq!(algorithm.name, "Bubble Sort");
        assert_eq!(algorithm.category, "sorting");
        assert!(catalog.algorithm("no-such-algorithm").is_none());
    }

    #[test]
    fn test_algorithms_in_category() {
        let catalog = Catalog::load().unwrap();
        let sorting = catalog.algorithms_in("sorting");
        assert!(sorting.len() >= 3);
        assert!(sorting.iter().all(|a| a.category == "sorting"));
    }

    #[test]
    fn test_patterns_ordered_by_number() {
        let catalog = Catalog::load().unwrap();
        let numbers: Vec<u32> = catalog.patterns_by_number().iter().map(|p| p.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn test_every_algorithm_category_resolves() {
        let catalog = Catalog::load().unwrap();
        for algorithm in catalog.algorithms() {
            assert!(
                catalog.category(&algorithm.category).is_some(),
                "algorithm '{}' has dangling category",
                algorithm.id
            );
        }
    }
}
