//! Tool navigation panel.
//!
//! Renders a catalog as a vertical list of links plus a small summary block.
//! Active-state styling is recomputed from the request path on every render;
//! nothing about the catalog itself ever changes.

use crate::catalog::{Catalog, ToolDescriptor, resolve_active};
use crate::render::{escape, escape_attr, icon};

/// Capability labels shown under the tool count. Static copy bound per
/// family shell, not computed from any runtime signal.
#[derive(Debug, Clone, Copy)]
pub struct StatsLabels {
    /// Where processing happens ("100% in your browser").
    pub processing: &'static str,
    /// Privacy posture ("Files never leave your device").
    pub privacy: &'static str,
}

/// Render the navigation panel for one catalog.
///
/// Each entry becomes a link to its route. The entry whose route exactly
/// matches `path` gets the `active` class; a "Popular" badge is attached iff
/// the descriptor says so. An empty catalog renders an empty list.
pub fn render_nav_panel(path: &str, catalog: &Catalog, stats: &StatsLabels) -> String {
    let active = resolve_active(path, catalog);
    let mut html = String::with_capacity(1024);

    html.push_str("<aside class=\"tool-nav\">\n<nav class=\"tool-list\" aria-label=\"");
    html.push_str(&escape_attr(catalog.family()));
    html.push_str(" tools\">\n");

    for tool in catalog {
        let is_active = active.is_some_and(|a| a.route == tool.route);
        render_entry(&mut html, tool, is_active);
    }

    html.push_str("</nav>\n");
    render_stats(&mut html, catalog.len(), stats);
    html.push_str("</aside>\n");
    html
}

fn render_entry(html: &mut String, tool: &ToolDescriptor, is_active: bool) {
    html.push_str("<a class=\"tool-link");
    if is_active {
        html.push_str(" active");
    }
    html.push_str("\" href=\"");
    html.push_str(&escape_attr(tool.route));
    html.push_str("\"");
    if is_active {
        html.push_str(" aria-current=\"page\"");
    }
    html.push_str(">\n");

    // Icon chip carries both accent tokens; they are opaque class names here.
    html.push_str("<span class=\"tool-chip ");
    html.push_str(&escape_attr(tool.accent_background));
    html.push_str("\">");
    html.push_str(&icon(tool.icon, tool.accent_color));
    html.push_str("</span>\n<span class=\"tool-text\">\n<span class=\"tool-name\">");
    html.push_str(&escape(tool.name));
    if tool.popular {
        html.push_str(" <span class=\"badge badge-popular\">Popular</span>");
    }
    // clamp-2 truncates for display only; the description text is intact.
    html.push_str("</span>\n<span class=\"tool-desc clamp-2\">");
    html.push_str(&escape(tool.description));
    html.push_str("</span>\n</span>\n</a>\n");
}

fn render_stats(html: &mut String, count: usize, stats: &StatsLabels) {
    html.push_str("<section class=\"tool-stats\">\n<h3>Quick Info</h3>\n");
    html.push_str("<div class=\"stat-row\"><span class=\"stat-label\">Tools Available</span>");
    html.push_str("<span class=\"stat-value\">");
    html.push_str(&count.to_string());
    html.push_str("</span></div>\n");

    for label in [stats.processing, stats.privacy] {
        html.push_str("<div class=\"stat-row stat-capability\">");
        html.push_str(&icon("check", "fg-emerald"));
        html.push_str("<span>");
        html.push_str(&escape(label));
        html.push_str("</span></div>\n");
    }

    html.push_str("</section>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ToolDescriptor, test_tool};

    const STATS: StatsLabels = StatsLabels {
        processing: "100% in your browser",
        privacy: "Files never leave your device",
    };

    fn popular_tool(name: &'static str, route: &'static str) -> ToolDescriptor {
        ToolDescriptor {
            popular: true,
            ..test_tool(name, route)
        }
    }

    #[test]
    fn test_panel_renders_every_entry_in_order() {
        let catalog = Catalog::new(
            "test",
            vec![
                test_tool("First", "/first"),
                test_tool("Second", "/second"),
                test_tool("Third", "/third"),
            ],
        )
        .unwrap();

        let html = render_nav_panel("/none", &catalog, &STATS);
        assert_eq!(html.matches("class=\"tool-link").count(), 3);

        let first = html.find("href=\"/first\"").unwrap();
        let second = html.find("href=\"/second\"").unwrap();
        let third = html.find("href=\"/third\"").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_badge_iff_popular() {
        let catalog = Catalog::new(
            "test",
            vec![
                popular_tool("PDF Generator", "/pdf-generator"),
                test_tool("PDF Viewer", "/pdf-viewer"),
            ],
        )
        .unwrap();

        let html = render_nav_panel("/none", &catalog, &STATS);
        assert_eq!(html.matches("badge-popular").count(), 1);

        // The badge belongs to the popular entry.
        let generator = html.find("/pdf-generator").unwrap();
        let viewer = html.find("/pdf-viewer").unwrap();
        let badge = html.find("badge-popular").unwrap();
        assert!(generator < badge && badge < viewer);
    }

    #[test]
    fn test_active_entry_marked_once() {
        let catalog = Catalog::new(
            "test",
            vec![
                test_tool("Image Resizer", "/image-resizer"),
                test_tool("Other", "/other"),
            ],
        )
        .unwrap();

        let html = render_nav_panel("/image-resizer", &catalog, &STATS);
        assert_eq!(html.matches("tool-link active").count(), 1);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);

        let active_pos = html.find("tool-link active").unwrap();
        let resizer_pos = html.find("href=\"/image-resizer\"").unwrap();
        assert!(active_pos < resizer_pos);
    }

    #[test]
    fn test_unrelated_path_marks_nothing_active() {
        let catalog =
            Catalog::new("test", vec![test_tool("One", "/one"), test_tool("Two", "/two")])
                .unwrap();

        let html = render_nav_panel("/unrelated-page", &catalog, &STATS);
        assert!(!html.contains("tool-link active"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn test_empty_catalog_renders_empty_list() {
        let catalog = Catalog::new("test", vec![]).unwrap();
        let html = render_nav_panel("/", &catalog, &STATS);

        assert!(!html.contains("tool-link"));
        assert!(html.contains("tool-stats"));
        assert!(html.contains("<span class=\"stat-value\">0</span>"));
    }

    #[test]
    fn test_stats_count_follows_catalog_len() {
        let six = Catalog::new(
            "image",
            (0..6)
                .map(|i| {
                    let name: &'static str = Box::leak(format!("Tool {i}").into_boxed_str());
                    let route: &'static str = Box::leak(format!("/tool-{i}").into_boxed_str());
                    test_tool(name, route)
                })
                .collect(),
        )
        .unwrap();

        let html = render_nav_panel("/", &six, &STATS);
        assert!(html.contains("<span class=\"stat-value\">6</span>"));
    }

    #[test]
    fn test_capability_labels_rendered() {
        let catalog = Catalog::new("test", vec![test_tool("One", "/one")]).unwrap();
        let html = render_nav_panel("/", &catalog, &STATS);

        assert!(html.contains("100% in your browser"));
        assert!(html.contains("Files never leave your device"));
    }

    #[test]
    fn test_description_is_escaped_not_truncated() {
        let mut tool = test_tool("One", "/one");
        tool.description = "a <long> description & more words than any two lines could hold";
        let catalog = Catalog::new("test", vec![tool]).unwrap();

        let html = render_nav_panel("/", &catalog, &STATS);
        assert!(html.contains("a &lt;long&gt; description &amp; more words"));
        assert!(html.contains("clamp-2"));
    }
}
