//! HTML page template.

use std::fmt::Write;

use ptabs_renderer::escape_html;

/// Icon font referenced by the `fa fa-*` classes on platform tabs.
const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";

/// Data for rendering a standalone page.
pub(crate) struct PageData<'a> {
    pub title: &'a str,
    pub html_content: &'a str,
    /// Relative path from the page to the site root (`""`, `"../"`, ...).
    pub root_prefix: &'a str,
}

/// Render a complete HTML document linking the tab assets.
pub(crate) fn render_page(data: &PageData<'_>) -> String {
    let mut html = String::with_capacity(data.html_content.len() + 512);

    let title = escape_html(data.title);
    let prefix = data.root_prefix;
    let stylesheet = ptabs_assets::STYLESHEET;
    let script = ptabs_assets::SCRIPT;

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{title}</title>");
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{ICON_STYLESHEET}\">");
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{prefix}assets/{stylesheet}\">"
    );
    html.push_str("</head>\n<body>\n<article>\n");
    html.push_str(data.html_content);
    html.push_str("\n</article>\n");
    let _ = writeln!(html, "<script src=\"{prefix}assets/{script}\"></script>");
    html.push_str("</body>\n</html>\n");

    html
}

/// Relative prefix from a page at `depth` directories below the root.
pub(crate) fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}
