//! Check command.
//!
//! Validates everything that can be validated without writing output: the
//! config file, the tool catalog invariants, and the routing table.

use crate::catalog::families;
use crate::config::SiteConfig;
use crate::{log, pages};
use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use rustc_hash::FxHashSet;

/// Run all site checks, printing one line per check.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    // Config was already validated during load; re-run for the report line.
    config.validate()?;
    pass("config valid");

    families::ensure_valid()?;
    pass(&format!(
        "catalogs valid ({} image tools, {} pdf tools)",
        families::image_tools().len(),
        families::pdf_tools().len()
    ));

    check_routes(config)?;
    pass(&format!("{} routes render", pages::all_routes().len()));

    log!("check"; "all checks passed");
    Ok(())
}

/// Site-wide route checks: no collisions across the routing table, and
/// every registered route actually produces a page.
fn check_routes(config: &SiteConfig) -> Result<()> {
    let routes = pages::all_routes();

    let mut seen = FxHashSet::default();
    for route in &routes {
        if !seen.insert(*route) {
            bail!("route {route} is registered twice");
        }
    }

    for route in &routes {
        if pages::render_route(config, route).is_none() {
            bail!("route {route} is registered but does not render");
        }
    }

    Ok(())
}

fn pass(message: &str) {
    println!("{} {message}", "✓".green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_on_defaults() {
        check_site(&SiteConfig::default()).unwrap();
    }

    #[test]
    fn test_check_routes() {
        check_routes(&SiteConfig::default()).unwrap();
    }
}
