//! Site configuration management for `toolsite.toml`.
//!
//! The tool catalogs are compiled in; configuration only adjusts site
//! metadata, the dev server binding and build output. A missing config file
//! therefore falls back to defaults instead of aborting.

mod error;
mod handle;
mod section;

pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use section::{BuildConfig, ServeConfig, SiteInfoConfig, SitemapConfig};

use crate::cli::{Cli, Commands};
use crate::debug;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Root configuration structure representing toolsite.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site metadata
    pub site: SiteInfoConfig,

    /// Build settings
    pub build: BuildConfig,

    /// Development server settings
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Reads the file named by `-C/--config` when it exists, otherwise
    /// starts from defaults, then applies CLI overrides and validates.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = if cli.config.exists() {
            Self::from_path(&cli.config)?
        } else {
            debug!("config"; "{} not found, using defaults", cli.config.display());
            Self::default()
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply CLI options on top of the file values.
    fn apply_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { output, sitemap } => {
                if let Some(output) = output {
                    self.build.output = output.clone();
                }
                if let Some(sitemap) = sitemap {
                    self.build.sitemap.enable = *sitemap;
                }
            }
            Commands::Serve { interface, port } => {
                if let Some(interface) = interface {
                    self.serve.interface = *interface;
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
            }
            Commands::Check {} => {}
        }
    }

    /// Validate the configuration.
    ///
    /// # Checks
    /// - `site.url`, when set, must be a http(s) URL with a host
    /// - `site.title` must not be empty (it names the site everywhere)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".to_string(),
            ));
        }

        if let Some(url_str) = &self.site.url {
            let parsed = url::Url::parse(url_str).map_err(|e| {
                ConfigError::Validation(format!("site.url `{url_str}` is invalid: {e}"))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::Validation(format!(
                    "site.url scheme `{}` not supported, must be http or https",
                    parsed.scheme()
                )));
            }
            if parsed.host_str().is_none() {
                return Err(ConfigError::Validation(
                    "site.url must have a valid host, e.g. https://makegifs.online".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Parse a TOML snippet into a config (test helper for section tests).
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> SiteConfig {
    toml::from_str(content).expect("test config should parse")
}
