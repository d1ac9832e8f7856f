//! Static HTML export of the catalogue
//!
//! This crate renders the content catalogue into a self-contained page
//! tree: an index, one page per algorithm and pattern, the syntax guide,
//! and a complexity reference table. Styling is embedded into every page
//! (baseline layout plus one of two color themes), so the output needs no
//! assets beyond the HTML files themselves.
//!
//! Trust boundary: all catalogue text is escaped on its way into markup.
//! The only strings inserted verbatim are fragments this crate or the
//! highlighter produced itself.
//!
//! The file structure:
//!
//! ```text
//! .
//! ├── error.rs        # RenderError
//! ├── page.rs         # Document chrome, themes, code-block component
//! ├── pages
//! │   ├── index.rs    # Landing page (category cards, pattern teasers)
//! │   ├── algorithms.rs
//! │   ├── patterns.rs
//! │   ├── syntax.rs
//! │   └── complexity.rs
//! ├── publish.rs      # build_site(): render and write the page tree
//! └── lib.rs
//! ```
//!
//! css/ holds the stylesheet sources, embedded via include_str! so the
//! binaries and the styling cannot drift apart.

pub mod error;
pub mod page;
pub mod pages;
pub mod publish;

pub use error::RenderError;
pub use page::{code_block, wrap_in_document, SiteMeta, Theme};
pub use publish::build_site;
