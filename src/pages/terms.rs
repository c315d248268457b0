//! Terms of Service page.
//!
//! A standalone static document, not mounted in a section shell. Carries the
//! structured-data block search engines read for the legal page.

use serde_json::json;

use crate::config::SiteConfig;
use crate::render::{Document, escape};

/// Last revision date shown on the page and in the structured data.
const REVISED: &str = "2025-11-02";

pub fn render(config: &SiteConfig) -> String {
    let head_extra = structured_data(config);
    let body = body(config);

    Document {
        lang: &config.site.language,
        title: &format!("Terms of Service | {}", config.site.title),
        description: "The terms that apply when you use our free online file tools.",
        head_extra: Some(&head_extra),
        body: &body,
    }
    .render()
}

/// JSON-LD `WebPage` block. Fields are fixed copy except the canonical URL,
/// which follows the configured site URL when one is set.
fn structured_data(config: &SiteConfig) -> String {
    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "WebPage",
        "name": "Terms of Service",
        "description": "Terms of Service for the free online image and PDF tools.",
        "dateModified": REVISED,
        "isPartOf": {
            "@type": "WebSite",
            "name": config.site.title,
        },
    });

    if let Some(url) = &config.site.url {
        let page_url = format!("{}/terms", url.trim_end_matches('/'));
        data["url"] = json!(page_url);
        data["isPartOf"]["url"] = json!(url);
    }

    format!(
        "<script type=\"application/ld+json\">{}</script>",
        data
    )
}

fn body(config: &SiteConfig) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"narrow-page terms\">\n<a class=\"back-link\" href=\"/\">Back to ");
    html.push_str(&escape(&config.site.title));
    html.push_str("</a>\n<h1>Terms of Service</h1>\n<p class=\"revised\">Last updated: ");
    html.push_str(REVISED);
    html.push_str("</p>\n");

    section(&mut html, "1. Acceptance of terms", &[
        "By accessing or using this website you agree to be bound by these \
         Terms of Service. If you do not agree with any part of the terms, \
         do not use the site.",
    ]);
    section(&mut html, "2. The service", &[
        "The site provides free, browser-based utilities for working with \
         image and PDF files. Files you process are handled on your own \
         device; the tools do not upload your files to our servers.",
        "Tools marked as coming soon are previews of planned functionality \
         and may change or be withdrawn before release.",
    ]);
    section(&mut html, "3. Acceptable use", &[
        "You agree not to use the service for any unlawful purpose, to \
         process content you do not have the right to use, or to attempt to \
         disrupt or overload the site.",
    ]);
    section(&mut html, "4. Intellectual property", &[
        "The site, its design and its copy are our property. You keep all \
         rights to the files you process; we claim none.",
    ]);
    section(&mut html, "5. Disclaimer of warranties", &[
        "The service is provided \"as is\" without warranty of any kind. We \
         do not guarantee that any tool will be available, error free, or \
         fit for a particular purpose.",
    ]);
    section(&mut html, "6. Limitation of liability", &[
        "To the maximum extent permitted by law, we are not liable for any \
         loss or damage arising from your use of the service, including loss \
         of data contained in processed files.",
    ]);
    section(&mut html, "7. Changes to these terms", &[
        "We may update these terms from time to time. The date above \
         reflects the latest revision; continued use of the site after a \
         change constitutes acceptance.",
    ]);

    html.push_str("</div>");
    html
}

fn section(html: &mut String, heading: &str, paragraphs: &[&str]) {
    html.push_str("<section>\n<h2>");
    html.push_str(&escape(heading));
    html.push_str("</h2>\n");
    for p in paragraphs {
        html.push_str("<p>");
        html.push_str(&escape(p));
        html.push_str("</p>\n");
    }
    html.push_str("</section>\n");
}
