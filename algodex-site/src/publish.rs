//! Rendering and writing the full page tree
//!
//! The generated layout:
//!
//! ```text
//! out/
//! ├── index.html
//! ├── algorithms/
//! │   ├── index.html
//! │   └── <algorithm-id>.html
//! ├── patterns/
//! │   ├── index.html
//! │   └── <pattern-id>.html
//! ├── syntax/index.html
//! └── complexity/index.html
//! ```

use crate::error::RenderError;
use crate::page::{SiteMeta, Theme};
use crate::pages;
use algodex_catalog::Catalog;
use std::fs;
use std::path::Path;

/// Render every page of the site into `out_dir`
pub fn build_site(
    catalog: &Catalog,
    meta: &SiteMeta,
    theme: Theme,
    out_dir: &Path,
) -> Result<(), RenderError> {
    for subdir in ["algorithms", "patterns", "syntax", "complexity"] {
        create_dir(&out_dir.join(subdir))?;
    }

    write_page(
        &out_dir.join("index.html"),
        &pages::index::render(catalog, meta, theme),
    )?;

    write_page(
        &out_dir.join("algorithms/index.html"),
        &pages::algorithms::render_index(catalog, meta, theme),
    )?;
    for algorithm in catalog.algorithms() {
        write_page(
            &out_dir.join(format!("algorithms/{}.html", algorithm.id)),
            &pages::algorithms::render_detail(catalog, algorithm, meta, theme),
        )?;
    }

    write_page(
        &out_dir.join("patterns/index.html"),
        &pages::patterns::render_index(catalog, meta, theme),
    )?;
    for pattern in catalog.patterns() {
        write_page(
            &out_dir.join(format!("patterns/{}.html", pattern.id)),
            &pages::patterns::render_detail(pattern, meta, theme),
        )?;
    }

    write_page(
        &out_dir.join("syntax/index.html"),
        &pages::syntax::render(catalog, meta, theme),
    )?;
    write_page(
        &out_dir.join("complexity/index.html"),
        &pages::complexity::render(catalog, meta, theme),
    )?;

    Ok(())
}

fn create_dir(path: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(path).map_err(|e| RenderError::CreateDir {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    fs::write(path, html).map_err(|e| RenderError::WriteFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
