//! Static content catalogue for the reference site
//!
//! This crate owns the site's content: algorithm entries grouped into
//! categories, the numbered coding-pattern collection, and the C++ syntax
//! guide. All of it is immutable data, embedded into the binary as YAML
//! and deserialized once at load time. Nothing here computes anything on
//! behalf of a user; the records exist to be rendered.
//!
//! The data files live under `data/` and are embedded with `include_str!`
//! so the binaries and the content can never drift apart. `Catalog::load`
//! deserializes them and cross-validates references (category ids,
//! subcategory names, pattern numbering) before handing out a read-only
//! catalogue.
//!
//! The file structure:
//!
//! ```text
//! .
//! ├── records.rs      # Record types (Category, Algorithm, Pattern, ...)
//! ├── catalog.rs      # Loading, validation, lookup
//! ├── data/           # Embedded YAML content
//! └── lib.rs
//! ```

pub mod catalog;
pub mod records;

pub use catalog::{Catalog, CatalogError};
pub use records::{Algorithm, Category, Difficulty, Pattern, PracticeProblem, SyntaxSection};
