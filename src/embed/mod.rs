//! Embedded static assets.
//!
//! The site stylesheet is compiled into the binary: `serve` answers it from
//! memory and `build` writes it into the output directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Site stylesheet content.
pub const SITE_CSS: &str = include_str!("site.css");

/// URL the stylesheet is linked and served under.
pub const SITE_CSS_ROUTE: &str = "/assets/site.css";

/// Write embedded assets into the output directory.
pub fn write_embedded_assets(output_dir: &Path) -> Result<()> {
    // SITE_CSS_ROUTE is absolute; strip the slash to make it output-relative.
    let css_path = output_dir.join(SITE_CSS_ROUTE.trim_start_matches('/'));

    if let Some(parent) = css_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&css_path, SITE_CSS)
        .with_context(|| format!("Failed to write {}", css_path.display()))
}
