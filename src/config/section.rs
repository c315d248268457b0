//! Configuration sections for `toolsite.toml`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "makegifs.online"
//! url = "https://makegifs.online"
//!
//! [build]
//! output = "dist"
//!
//! [build.sitemap]
//! enable = true
//!
//! [serve]
//! interface = "127.0.0.1"
//! port = 4173
//! ```

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// `[site]` metadata rendered into every page head.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description (home hero and meta description).
    pub description: String,

    /// Canonical site URL (e.g., "https://makegifs.online").
    /// Required for absolute sitemap entries; pages render without it.
    pub url: Option<String>,

    /// Language code (e.g., "en").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "makegifs.online".to_string(),
            description: "Free online tools to convert, resize and share images and PDFs."
                .to_string(),
            url: None,
            language: "en".to_string(),
        }
    }
}

/// `[build]` output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory (relative to the project root).
    pub output: PathBuf,

    /// Sitemap generation.
    pub sitemap: SitemapConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            sitemap: SitemapConfig::default(),
        }
    }
}

/// `[build.sitemap]` settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Generate sitemap.xml during build.
    pub enable: bool,

    /// Output file name, relative to the output directory.
    pub path: String,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".to_string(),
        }
    }
}

/// `[serve]` development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 4173,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.site.title, "makegifs.online");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
        assert_eq!(config.build.output, Path::new("dist"));
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, "sitemap.xml");
        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.serve.port, 4173);
    }

    #[test]
    fn test_site_section() {
        let config = test_parse_config(
            "[site]\ntitle = \"pdf.example\"\nurl = \"https://pdf.example\"\nlanguage = \"de\"",
        );

        assert_eq!(config.site.title, "pdf.example");
        assert_eq!(config.site.url.as_deref(), Some("https://pdf.example"));
        assert_eq!(config.site.language, "de");
        // Untouched fields keep defaults.
        assert!(!config.site.description.is_empty());
    }

    #[test]
    fn test_build_section() {
        let config =
            test_parse_config("[build]\noutput = \"public\"\n[build.sitemap]\nenable = false");

        assert_eq!(config.build.output, Path::new("public"));
        assert!(!config.build.sitemap.enable);
    }

    #[test]
    fn test_serve_section() {
        let config = test_parse_config("[serve]\ninterface = \"0.0.0.0\"\nport = 8080");

        assert_eq!(config.serve.interface, IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_partial_override() {
        let config = test_parse_config("[serve]\nport = 3000");

        assert_eq!(config.serve.port, 3000);
        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
    }
}
