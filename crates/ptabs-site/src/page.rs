//! Markdown page rendering.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use ptabs_renderer::{BuildContext, rewrite_page};

/// Result of rendering a markdown page.
#[derive(Clone, Debug)]
pub struct PageRenderResult {
    /// Rendered HTML content with tab containers expanded.
    pub html: String,
    /// Text of the first H1 heading, if any.
    pub title: Option<String>,
    /// Number of tab containers on the page.
    pub containers: usize,
    /// Warnings generated while expanding tab containers.
    pub warnings: Vec<String>,
}

fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML and expand tab containers.
///
/// Block markers are HTML comments, so they pass through markdown rendering
/// as raw HTML and are expanded afterwards.
///
/// # Example
///
/// ```
/// use ptabs_renderer::BuildContext;
/// use ptabs_site::render_markdown;
///
/// let mut ctx = BuildContext::new("Android");
/// let markdown = "# Setup\n\n<!-- platformtabs id=\"setup\" -->\n<!-- platform: Android -->\n\nUse **Gradle**.\n\n<!-- /platform -->\n<!-- /platformtabs -->\n";
///
/// let result = render_markdown(&mut ctx, markdown);
///
/// assert_eq!(result.title.as_deref(), Some("Setup"));
/// assert!(result.html.contains("data-platform=\"Android\">Use <strong>Gradle</strong>.</div>"));
/// ```
pub fn render_markdown(ctx: &mut BuildContext, markdown: &str) -> PageRenderResult {
    let title = extract_title(markdown);

    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, Parser::new_ext(markdown, markdown_options()));

    let result = rewrite_page(ctx, &rendered);

    PageRenderResult {
        html: result.html,
        title,
        containers: result.containers,
        warnings: result.warnings,
    }
}

/// Text of the first H1 heading.
fn extract_title(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut title = String::new();

    for event in Parser::new_ext(markdown, markdown_options()) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = title.trim();
                return (!title.is_empty()).then(|| title.to_owned());
            }
            Event::Text(text) | Event::Code(text) if in_h1 => title.push_str(&text),
            _ => {}
        }
    }
    None
}
