//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads: the request loop and the build pass
//! share one immutable snapshot set once at startup.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Current config snapshot.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install the loaded config as the global snapshot.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_read() {
        let mut config = SiteConfig::default();
        config.site.title = "handle test".to_string();

        let installed = init_config(config);
        assert_eq!(cfg().site.title, installed.site.title);
    }
}
