//! Page-level container substitution.
//!
//! Finds `platformtabs` and `codesample` containers in rendered page HTML and
//! replaces each one, markers included, with its tab tree:
//!
//! ```text
//! <!-- platformtabs id="install" --> ... <!-- /platformtabs -->
//! <!-- codesample id="init" --> ... <!-- /codesample -->
//! ```
//!
//! The `id` attribute is optional; containers without one get an id from the
//! [`BuildContext`].

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::context::BuildContext;
use crate::markup::{ContainerKind, EMPTY_CONTAINER_HTML};
use crate::tree::build_container;

static CONTAINER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?s)<!--\s*platformtabs(?:\s+id="(?<pt_id>[^"]+)")?\s*-->(?<pt_body>.*?)<!--\s*/platformtabs\s*-->"#,
        r#"|<!--\s*codesample(?:\s+id="(?<cs_id>[^"]+)")?\s*-->(?<cs_body>.*?)<!--\s*/codesample\s*-->"#,
    ))
    .unwrap()
});

/// Result of rewriting one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteResult {
    /// Page HTML with every container replaced.
    pub html: String,
    /// Number of containers found, including empty ones.
    pub containers: usize,
    /// Warnings for containers that rendered as the error fragment.
    pub warnings: Vec<String>,
}

/// Replace every tab container in `page`.
///
/// Containers are processed left to right and rendered independently. Only
/// id generation touches `ctx`; a container with an explicit id leaves the
/// counter untouched.
///
/// # Example
///
/// ```
/// use ptabs_renderer::{BuildContext, rewrite_page};
///
/// let mut ctx = BuildContext::new("Android");
/// let page = r#"<h1>Install</h1><!-- platformtabs id="t1" --><!-- platform: iOS -->Hi<!-- /platform --><!-- platform: Android -->Hey<!-- /platform --><!-- /platformtabs -->"#;
///
/// let result = rewrite_page(&mut ctx, page);
///
/// assert!(result.html.starts_with(r#"<h1>Install</h1><div class="platform-tabs-container" id="t1">"#));
/// assert_eq!(result.containers, 1);
/// assert!(result.warnings.is_empty());
/// ```
pub fn rewrite_page(ctx: &mut BuildContext, page: &str) -> RewriteResult {
    let mut containers = 0;
    let mut warnings = Vec::new();

    let html = CONTAINER_RE.replace_all(page, |caps: &Captures<'_>| {
        containers += 1;

        let (kind, id, body) = if let Some(body) = caps.name("pt_body") {
            (ContainerKind::PlatformTabs, caps.name("pt_id"), body)
        } else if let Some(body) = caps.name("cs_body") {
            (ContainerKind::CodeSample, caps.name("cs_id"), body)
        } else {
            return caps[0].to_owned();
        };

        let id = id.map_or_else(|| ctx.generate_id(kind), |m| m.as_str().to_owned());

        match build_container(kind, &id, body.as_str(), ctx.default_platform()) {
            Some(container) => container.to_html(),
            None => {
                warnings.push(format!(
                    "{} container '{id}' contains no platform blocks",
                    kind.keyword()
                ));
                EMPTY_CONTAINER_HTML.to_owned()
            }
        }
    });

    RewriteResult {
        html: html.into_owned(),
        containers,
        warnings,
    }
}
