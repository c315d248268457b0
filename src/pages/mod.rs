//! Site pages.
//!
//! One routing table for the whole shell: the home page, the two family
//! sections, every tool placeholder, and the standalone Terms page. Pages
//! are rendered per request from the same immutable inputs, so a route
//! always produces the same document.

mod home;
mod placeholder;
mod terms;

use crate::catalog::{families, resolve_active};
use crate::config::SiteConfig;
use crate::render::Document;
use crate::render::shell::{ShellConfig, image_shell, pdf_shell, render_shell};

/// Routes of the two family index pages.
pub const IMAGE_INDEX_ROUTE: &str = "/image-tools";
pub const PDF_INDEX_ROUTE: &str = "/pdf-tools";

/// Route of the Terms of Service page.
pub const TERMS_ROUTE: &str = "/terms";

/// Render the page for `path`, or `None` when no route matches.
///
/// Matching is exact: `/image-resizer/` is not `/image-resizer`.
pub fn render_route(config: &SiteConfig, path: &str) -> Option<String> {
    match path {
        "/" => Some(home::render(config)),
        IMAGE_INDEX_ROUTE => Some(render_family_index(config, &image_shell())),
        PDF_INDEX_ROUTE => Some(render_family_index(config, &pdf_shell())),
        TERMS_ROUTE => Some(terms::render(config)),
        _ => render_tool_page(config, path),
    }
}

/// Every registered route, in output order. Feeds the build pass and the
/// sitemap.
pub fn all_routes() -> Vec<&'static str> {
    let mut routes = vec!["/", IMAGE_INDEX_ROUTE, PDF_INDEX_ROUTE];
    routes.extend(families::image_tools().iter().map(|t| t.route));
    routes.extend(families::pdf_tools().iter().map(|t| t.route));
    routes.push(TERMS_ROUTE);
    routes
}

/// The 404 page, served for unmatched paths and written as `404.html`.
pub fn render_not_found(config: &SiteConfig) -> String {
    let body = format!(
        "<div class=\"narrow-page\">\n<h1>Page not found</h1>\n\
         <p>The page you are looking for does not exist.</p>\n\
         <p><a href=\"/\">Back to {}</a></p>\n</div>",
        crate::render::escape(&config.site.title)
    );

    Document {
        lang: &config.site.language,
        title: "Page not found",
        description: "The requested page does not exist.",
        head_extra: None,
        body: &body,
    }
    .render()
}

/// Family index: the shell with no active entry and a short prompt as
/// content.
fn render_family_index(config: &SiteConfig, shell: &ShellConfig) -> String {
    let content = format!(
        "<div class=\"content-card\">\n<h2>Pick a tool</h2>\n\
         <p>Choose one of the {} tools from the list to get started.</p>\n</div>",
        shell.catalog.len()
    );
    let body = render_shell(shell, shell.index_route, Some(&content));

    Document {
        lang: &config.site.language,
        title: &format!("{} | {}", shell.title, config.site.title),
        description: shell.subtitle,
        head_extra: None,
        body: &body,
    }
    .render()
}

/// Tool placeholder page inside its family shell.
fn render_tool_page(config: &SiteConfig, path: &str) -> Option<String> {
    let (shell, tool) = if let Some(tool) = resolve_active(path, families::image_tools()) {
        (image_shell(), tool)
    } else if let Some(tool) = resolve_active(path, families::pdf_tools()) {
        (pdf_shell(), tool)
    } else {
        return None;
    };

    let content = placeholder::render_coming_soon(tool);
    let body = render_shell(&shell, path, Some(&content));

    Some(
        Document {
            lang: &config.site.language,
            title: &format!("{} | {}", tool.name, config.site.title),
            description: tool.description,
            head_extra: None,
            body: &body,
        }
        .render(),
    )
}
