//! Leaf content normalization.
//!
//! Markdown renderers wrap a lone line of text in `<p>`, so the same leaf can
//! arrive with or without a paragraph wrapper depending on how the author laid
//! out the block. Stripping the wrapper keeps pane padding identical for every
//! branch.

const P_OPEN: &str = "<p>";
const P_CLOSE: &str = "</p>";

/// Remove an incidental paragraph wrapper from leaf content.
///
/// - `<p>text</p>` (exactly one pair around the whole content) becomes `text`
/// - `<p>text` with no `</p>` anywhere becomes `text`; the closing tag was left
///   outside the block by the markdown renderer
/// - anything else is returned trimmed
///
/// # Example
///
/// ```
/// use ptabs_renderer::normalize_content;
///
/// assert_eq!(normalize_content("<p>Hello</p>"), "Hello");
/// assert_eq!(normalize_content("<p>Hello"), "Hello");
/// assert_eq!(normalize_content("  Hello \n"), "Hello");
/// ```
#[must_use]
pub fn normalize_content(content: &str) -> &str {
    let trimmed = content.trim();

    let Some(rest) = trimmed.strip_prefix(P_OPEN) else {
        return trimmed;
    };

    if let Some(inner) = rest.strip_suffix(P_CLOSE)
        && !inner.contains(P_CLOSE)
    {
        return inner.trim();
    }

    if rest.contains(P_CLOSE) {
        trimmed
    } else {
        rest.trim()
    }
}
