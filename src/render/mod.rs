//! HTML rendering.
//!
//! Pages are assembled as strings: small composable functions append escaped
//! markup into a buffer and the finished document is handed to the server or
//! written to disk. Nothing here draws pixels and nothing holds state between
//! renders.

pub mod nav;
pub mod shell;

use std::borrow::Cow;

use crate::embed;

// =============================================================================
// Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s)
}

// =============================================================================
// Document skeleton
// =============================================================================

/// Full HTML document wrapper shared by every page.
pub struct Document<'a> {
    pub lang: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    /// Raw markup injected into `<head>` after the standard tags
    /// (structured data blocks). Already-valid HTML, not escaped.
    pub head_extra: Option<&'a str>,
    /// Raw body markup. Already-valid HTML, not escaped.
    pub body: &'a str,
}

impl Document<'_> {
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(self.body.len() + 512);

        html.push_str("<!doctype html>\n<html lang=\"");
        html.push_str(&escape_attr(self.lang));
        html.push_str("\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<title>");
        html.push_str(&escape(self.title));
        html.push_str("</title>\n");
        html.push_str("<meta name=\"description\" content=\"");
        html.push_str(&escape_attr(self.description));
        html.push_str("\">\n<link rel=\"stylesheet\" href=\"");
        html.push_str(embed::SITE_CSS_ROUTE);
        html.push_str("\">\n");
        if let Some(extra) = self.head_extra {
            html.push_str(extra);
            if !extra.ends_with('\n') {
                html.push('\n');
            }
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(self.body);
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

/// Render a symbolic icon reference as an inline glyph slot.
///
/// The glyph itself comes from the site stylesheet; the core only emits the
/// class hook.
pub fn icon(name: &str, extra_class: &str) -> String {
    if extra_class.is_empty() {
        format!("<span class=\"icon icon-{}\" aria-hidden=\"true\"></span>", escape_attr(name))
    } else {
        format!(
            "<span class=\"icon icon-{} {}\" aria-hidden=\"true\"></span>",
            escape_attr(name),
            escape_attr(extra_class)
        )
    }
}
