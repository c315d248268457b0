//! Active-route resolution.

use super::{Catalog, ToolDescriptor};

/// Return the catalog entry whose route exactly equals `path`.
///
/// Pure lookup, recomputed per render and never stored. Comparison is strict
/// string equality: no trailing-slash or case normalization, so
/// `/image-resizer` and `/image-resizer/` are distinct paths. Decoding of
/// browser URLs happens at the request boundary before this is called.
#[inline]
pub fn resolve_active<'a>(path: &str, catalog: &'a Catalog) -> Option<&'a ToolDescriptor> {
    catalog.iter().find(|tool| tool.route == path)
}
