//! Tab tree construction.
//!
//! Turns the body of one container into a [`Container`] node: platform blocks
//! are scanned, language blocks are scanned inside each platform for
//! `codesample` containers, leaf content is normalized, and the initial active
//! branch is chosen per level.

use crate::block::{BlockKind, Branch, PlatformBranch};
use crate::icons::platform_icon;
use crate::markup::{
    Container, ContainerKind, EMPTY_CONTAINER_HTML, Level, Pane, PaneBody, Tab, TabSet,
};
use crate::normalize::normalize_content;
use crate::select::DefaultBranch;

/// Build the tab tree for a container body.
///
/// Returns `None` when the body contains no platform blocks.
///
/// # Example
///
/// ```
/// use ptabs_renderer::{ContainerKind, build_container};
///
/// let body = "<!-- platform: iOS -->Hi<!-- /platform --><!-- platform: Android -->Hey<!-- /platform -->";
/// let container = build_container(ContainerKind::PlatformTabs, "t1", body, "Android").unwrap();
///
/// assert_eq!(container.tabs.tabs.len(), 2);
/// assert!(container.tabs.panes[1].active);
/// ```
#[must_use]
pub fn build_container(
    kind: ContainerKind,
    id: &str,
    body: &str,
    default_platform: &str,
) -> Option<Container> {
    let platforms = BlockKind::Platform.scan(body);
    let active = DefaultBranch::Named(default_platform).select(&platforms)?;

    let tabs = platforms
        .iter()
        .enumerate()
        .map(|(idx, platform)| Tab {
            name: platform.name.clone(),
            icon: Some(platform_icon(&platform.name)),
            scope: id.to_owned(),
            active: idx == active,
        })
        .collect();

    let panes = platforms
        .into_iter()
        .enumerate()
        .map(|(idx, platform)| {
            let is_active = idx == active;
            match kind {
                ContainerKind::PlatformTabs => leaf_pane(platform, is_active),
                ContainerKind::CodeSample => {
                    code_sample_pane(id, PlatformBranch::from_branch(platform), is_active)
                }
            }
        })
        .collect();

    Some(Container {
        id: id.to_owned(),
        kind,
        tabs: TabSet {
            level: Level::Platform,
            tabs,
            panes,
        },
    })
}

/// Render a container body to HTML.
///
/// A body without platform blocks renders as [`EMPTY_CONTAINER_HTML`].
#[must_use]
pub fn render_container(
    kind: ContainerKind,
    id: &str,
    body: &str,
    default_platform: &str,
) -> String {
    build_container(kind, id, body, default_platform)
        .map_or_else(|| EMPTY_CONTAINER_HTML.to_owned(), |c| c.to_html())
}

/// Compound id of a platform pane: container id plus the lowercased platform
/// name with whitespace runs replaced by `-`.
///
/// # Example
///
/// ```
/// use ptabs_renderer::platform_pane_id;
///
/// assert_eq!(platform_pane_id("sample", "Apple  Watch"), "sample-apple-watch");
/// ```
#[must_use]
pub fn platform_pane_id(container_id: &str, platform: &str) -> String {
    let slug = platform
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("{container_id}-{slug}")
}

fn leaf_pane(branch: Branch, active: bool) -> Pane {
    let body = PaneBody::Leaf(normalize_content(&branch.content).to_owned());
    Pane {
        name: branch.name,
        id: None,
        active,
        body,
    }
}

fn code_sample_pane(container_id: &str, platform: PlatformBranch, active: bool) -> Pane {
    if platform.languages.is_empty() {
        return leaf_pane(platform.branch, active);
    }

    let pane_id = platform_pane_id(container_id, platform.name());
    // Languages have no configurable default.
    let active_lang = DefaultBranch::First
        .select(&platform.languages)
        .unwrap_or_default();

    let tabs = platform
        .languages
        .iter()
        .enumerate()
        .map(|(idx, lang)| Tab {
            name: lang.name.clone(),
            icon: None,
            scope: pane_id.clone(),
            active: idx == active_lang,
        })
        .collect();

    let panes = platform
        .languages
        .into_iter()
        .enumerate()
        .map(|(idx, lang)| leaf_pane(lang, idx == active_lang))
        .collect();

    Pane {
        name: platform.branch.name,
        id: Some(pane_id),
        active,
        body: PaneBody::Nested(TabSet {
            level: Level::Language,
            tabs,
            panes,
        }),
    }
}
