//! Section shell.
//!
//! One generic page frame shared by every tool family: back navigation, a
//! title/icon header, the navigation panel bound to the family catalog, and
//! an opaque content region. The image and PDF sections are the same shell
//! bound to different configuration, never two layouts.

use crate::catalog::{Catalog, families};
use crate::render::nav::{StatsLabels, render_nav_panel};
use crate::render::{escape, escape_attr, icon};

/// Everything that differs between family sections.
#[derive(Clone, Copy)]
pub struct ShellConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    /// Route of the family's own index page.
    pub index_route: &'static str,
    pub back_href: &'static str,
    pub back_label: &'static str,
    /// Gradient stops for the header band, opaque class tokens.
    pub accent_gradient_start: &'static str,
    pub accent_gradient_end: &'static str,
    pub stats: StatsLabels,
    pub catalog: &'static Catalog,
}

/// The image tools section.
pub fn image_shell() -> ShellConfig {
    ShellConfig {
        title: "Image Tools",
        subtitle: "Resize, convert and animate images without installing anything.",
        icon: "image",
        index_route: "/image-tools",
        back_href: "/",
        back_label: "All tools",
        accent_gradient_start: "grad-rose",
        accent_gradient_end: "grad-orange",
        stats: StatsLabels {
            processing: "100% in your browser",
            privacy: "Files never leave your device",
        },
        catalog: families::image_tools(),
    }
}

/// The PDF tools section.
pub fn pdf_shell() -> ShellConfig {
    ShellConfig {
        title: "PDF Tools",
        subtitle: "Create, merge, split and convert PDF documents for free.",
        icon: "file-text",
        index_route: "/pdf-tools",
        back_href: "/",
        back_label: "All tools",
        accent_gradient_start: "grad-violet",
        accent_gradient_end: "grad-sky",
        stats: StatsLabels {
            processing: "100% in your browser",
            privacy: "Files never leave your device",
        },
        catalog: families::pdf_tools(),
    }
}

/// Compose the section frame around an opaque content payload.
///
/// The shell holds no state: active-route detection is delegated to the
/// navigation panel, and `content` is emitted unchanged into the content
/// region. `None` renders an empty region rather than failing.
pub fn render_shell(shell: &ShellConfig, path: &str, content: Option<&str>) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<div class=\"section-shell\">\n<header class=\"section-header ");
    html.push_str(&escape_attr(shell.accent_gradient_start));
    html.push(' ');
    html.push_str(&escape_attr(shell.accent_gradient_end));
    html.push_str("\">\n<a class=\"back-link\" href=\"");
    html.push_str(&escape_attr(shell.back_href));
    html.push_str("\">");
    html.push_str(&icon("arrow-left", ""));
    html.push_str("<span>");
    html.push_str(&escape(shell.back_label));
    html.push_str("</span></a>\n<h1>");
    html.push_str(&icon(shell.icon, ""));
    html.push_str("<span>");
    html.push_str(&escape(shell.title));
    html.push_str("</span></h1>\n<p class=\"section-subtitle\">");
    html.push_str(&escape(shell.subtitle));
    html.push_str("</p>\n</header>\n<div class=\"section-body\">\n");

    html.push_str(&render_nav_panel(path, shell.catalog, &shell.stats));

    html.push_str("<main class=\"section-content\">");
    if let Some(content) = content {
        html.push('\n');
        html.push_str(content);
        html.push('\n');
    }
    html.push_str("</main>\n</div>\n</div>\n");
    html
}
