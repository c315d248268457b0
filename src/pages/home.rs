//! Home page.

use crate::catalog::families;
use crate::config::SiteConfig;
use crate::pages::{IMAGE_INDEX_ROUTE, PDF_INDEX_ROUTE, TERMS_ROUTE};
use crate::render::{Document, escape, icon};
use crate::utils::plural_count;

pub fn render(config: &SiteConfig) -> String {
    let image_count = families::image_tools().len();
    let pdf_count = families::pdf_tools().len();

    let mut body = String::with_capacity(1024);
    body.push_str("<div class=\"home\">\n<header class=\"hero\">\n<h1>");
    body.push_str(&escape(&config.site.title));
    body.push_str("</h1>\n<p>");
    body.push_str(&escape(&config.site.description));
    body.push_str("</p>\n</header>\n<div class=\"family-grid\">\n");

    family_card(
        &mut body,
        IMAGE_INDEX_ROUTE,
        "image",
        "Image Tools",
        &plural_count(image_count, "tool"),
    );
    family_card(
        &mut body,
        PDF_INDEX_ROUTE,
        "file-text",
        "PDF Tools",
        &plural_count(pdf_count, "tool"),
    );

    body.push_str("</div>\n<footer class=\"home-footer\">\n<a href=\"");
    body.push_str(TERMS_ROUTE);
    body.push_str("\">Terms of Service</a>\n</footer>\n</div>");

    Document {
        lang: &config.site.language,
        title: &config.site.title,
        description: &config.site.description,
        head_extra: None,
        body: &body,
    }
    .render()
}

fn family_card(body: &mut String, href: &str, glyph: &str, title: &str, count: &str) {
    body.push_str("<a class=\"family-card\" href=\"");
    body.push_str(href);
    body.push_str("\">");
    body.push_str(&icon(glyph, ""));
    body.push_str("<span class=\"family-title\">");
    body.push_str(&escape(title));
    body.push_str("</span><span class=\"family-count\">");
    body.push_str(&escape(count));
    body.push_str("</span></a>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_links_both_families() {
        let html = render(&SiteConfig::default());
        assert!(html.contains("href=\"/image-tools\""));
        assert!(html.contains("href=\"/pdf-tools\""));
        assert!(html.contains("href=\"/terms\""));
    }

    #[test]
    fn test_home_counts() {
        let html = render(&SiteConfig::default());
        assert!(html.contains("6 tools"));
        assert!(html.contains("8 tools"));
    }
}
