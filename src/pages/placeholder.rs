//! Tool placeholder content.
//!
//! The conversion engines live elsewhere; until a tool page ships its real
//! UI, its route shows this static announcement inside the family shell.

use crate::catalog::ToolDescriptor;
use crate::render::{escape, escape_attr, icon};

/// "Coming soon" payload for a tool route. Pure copy, no behavior.
pub fn render_coming_soon(tool: &ToolDescriptor) -> String {
    let mut html = String::with_capacity(512);

    html.push_str("<div class=\"content-card coming-soon\">\n<span class=\"coming-chip ");
    html.push_str(&escape_attr(tool.accent_background));
    html.push_str("\">");
    html.push_str(&icon(tool.icon, tool.accent_color));
    html.push_str("</span>\n<h2>");
    html.push_str(&escape(tool.name));
    html.push_str("</h2>\n<p>");
    html.push_str(&escape(tool.description));
    html.push_str("</p>\n<p class=\"coming-note\"><span class=\"badge\">Coming soon</span> ");
    html.push_str("We are putting the finishing touches on this tool. ");
    html.push_str("Check back shortly, no sign-up needed.</p>\n</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_tool;

    #[test]
    fn test_coming_soon_shows_tool_identity() {
        let tool = test_tool("GIF Maker", "/gif-maker");
        let html = render_coming_soon(&tool);

        assert!(html.contains("<h2>GIF Maker</h2>"));
        assert!(html.contains("Coming soon"));
        assert!(html.contains("icon-wrench"));
    }

    #[test]
    fn test_coming_soon_escapes_copy() {
        let mut tool = test_tool("A & B", "/a-b");
        tool.description = "for <files>";
        let html = render_coming_soon(&tool);

        assert!(html.contains("A &amp; B"));
        assert!(html.contains("for &lt;files&gt;"));
    }
}
