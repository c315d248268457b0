//! Build command.

use crate::config::SiteConfig;
use crate::utils::plural_count;
use crate::{generator, log};
use anyhow::Result;
use std::time::Instant;

/// Render the whole site into the output directory.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let start = Instant::now();
    let summary = generator::generate(config)?;

    log!(
        "build";
        "{} written to {} in {:.0?}",
        plural_count(summary.pages, "page"),
        config.build.output.display(),
        start.elapsed()
    );
    Ok(())
}
