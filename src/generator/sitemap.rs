//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all pages for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://makegifs.online/gif-maker</loc>
//!   </url>
//! </urlset>
//! ```

use crate::config::SiteConfig;
use crate::{log, pages};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build and write the sitemap.
pub fn build_sitemap(config: &SiteConfig) -> Result<()> {
    let sitemap = Sitemap::build(config);
    sitemap.write(config)
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig) -> Self {
        let base_url = config
            .site
            .url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/');

        let urls = pages::all_routes()
            .iter()
            .map(|route| format!("{base_url}{route}"))
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for url in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&url));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml();

        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", config.build.sitemap.path);
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
