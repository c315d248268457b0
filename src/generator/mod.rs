//! Static output generation.
//!
//! `generate()` renders every registered route into the output directory:
//! `/` becomes `index.html`, any other route becomes `<route>/index.html`.
//! The embedded stylesheet, the 404 page and the sitemap land next to them.

pub mod sitemap;

use crate::config::SiteConfig;
use crate::{debug, embed, pages};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// What a build pass produced.
pub struct BuildSummary {
    /// Number of HTML pages written (including the 404 page).
    pub pages: usize,
}

/// Render all routes, assets and the sitemap into `config.build.output`.
pub fn generate(config: &SiteConfig) -> Result<BuildSummary> {
    let output_dir = &config.build.output;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    // Pages and embedded assets are independent; write them in parallel.
    let (pages_written, assets_result) = rayon::join(
        || write_pages(config, output_dir),
        || embed::write_embedded_assets(output_dir),
    );
    let mut pages = pages_written?;
    assets_result?;

    // 404 page for static hosts that look for 404.html.
    let not_found = pages::render_not_found(config);
    fs::write(output_dir.join("404.html"), not_found)
        .with_context(|| format!("Failed to write 404.html to {}", output_dir.display()))?;
    pages += 1;

    if config.build.sitemap.enable {
        sitemap::build_sitemap(config)?;
    }

    Ok(BuildSummary { pages })
}

fn write_pages(config: &SiteConfig, output_dir: &Path) -> Result<usize> {
    let mut written = 0;

    for route in pages::all_routes() {
        let Some(html) = pages::render_route(config, route) else {
            // all_routes() and render_route() come from the same table, so
            // a miss here is a routing-table bug, not a user error.
            bail!("registered route {route} did not render");
        };

        let path = output_path(output_dir, route);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, html)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        debug!("build"; "{} -> {}", route, path.display());
        written += 1;
    }

    Ok(written)
}

/// Map a route to its output file: `/` -> `index.html`,
/// `/gif-maker` -> `gif-maker/index.html`.
fn output_path(output_dir: &Path, route: &str) -> PathBuf {
    if route == "/" {
        output_dir.join("index.html")
    } else {
        output_dir
            .join(route.trim_start_matches('/'))
            .join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_mapping() {
        let out = Path::new("dist");
        assert_eq!(output_path(out, "/"), Path::new("dist/index.html"));
        assert_eq!(
            output_path(out, "/gif-maker"),
            Path::new("dist/gif-maker/index.html")
        );
        assert_eq!(
            output_path(out, "/image-tools"),
            Path::new("dist/image-tools/index.html")
        );
    }

    #[test]
    fn test_generate_writes_every_route() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        let summary = generate(&config).unwrap();
        // 18 routes plus the 404 page.
        assert_eq!(summary.pages, 19);

        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("image-tools/index.html").is_file());
        assert!(dir.path().join("pdf-tools/index.html").is_file());
        assert!(dir.path().join("image-resizer/index.html").is_file());
        assert!(dir.path().join("pdf-generator/index.html").is_file());
        assert!(dir.path().join("terms/index.html").is_file());
        assert!(dir.path().join("404.html").is_file());
        assert!(dir.path().join("assets/site.css").is_file());
        assert!(dir.path().join("sitemap.xml").is_file());
    }

    #[test]
    fn test_generate_respects_sitemap_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();
        config.build.sitemap.enable = false;

        generate(&config).unwrap();
        assert!(!dir.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_written_page_marks_active_tool() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.output = dir.path().to_path_buf();

        generate(&config).unwrap();

        let html =
            fs::read_to_string(dir.path().join("image-resizer/index.html")).unwrap();
        assert_eq!(html.matches("tool-link active").count(), 1);
    }
}
