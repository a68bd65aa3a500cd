//! Typed tab markup and its HTML serialization.
//!
//! Every class and data attribute the client switcher relies on is declared
//! once, on [`Level`] and in [`classes`]. Nodes are assembled by the tree
//! renderer and serialized in a single pass by [`Container::write_html`].

use std::fmt::Write;

/// Class names shared with the stylesheet and the client script.
pub mod classes {
    /// Root of a single-level container.
    pub const PLATFORM_CONTAINER: &str = "platform-tabs-container";
    /// Root of a two-level container.
    pub const CODE_SAMPLE_CONTAINER: &str = "code-sample-container";
    /// Fragment emitted for a container without platform blocks.
    pub const ERROR: &str = "platform-tabs-error";
    /// Marker for the initially visible header and pane.
    pub const ACTIVE: &str = "active";
}

/// Fragment emitted in place of a container that has no platform blocks.
pub const EMPTY_CONTAINER_HTML: &str =
    r#"<div class="platform-tabs-error">No platform blocks found</div>"#;

/// Nesting level of a tab set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Top-level platform tabs.
    Platform,
    /// Language tabs nested inside a platform pane.
    Language,
}

impl Level {
    /// Class of the region holding the header buttons.
    #[must_use]
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Platform => "platform-tabs-header",
            Self::Language => "language-tabs-header",
        }
    }

    /// Class of a header button.
    #[must_use]
    pub fn tab_class(self) -> &'static str {
        match self {
            Self::Platform => "platform-tab",
            Self::Language => "language-tab",
        }
    }

    /// Class of the region holding the panes.
    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Platform => "platform-tabs-content",
            Self::Language => "language-tabs-content",
        }
    }

    /// Class of a content pane.
    #[must_use]
    pub fn pane_class(self) -> &'static str {
        match self {
            Self::Platform => "platform-content",
            Self::Language => "language-content",
        }
    }

    /// Attribute carrying the branch name on buttons and panes.
    #[must_use]
    pub fn name_attr(self) -> &'static str {
        match self {
            Self::Platform => "data-platform",
            Self::Language => "data-lang",
        }
    }

    /// Attribute on buttons referencing the element that scopes the switch.
    ///
    /// Platform buttons point at the container id, language buttons at the
    /// compound id of their platform pane.
    #[must_use]
    pub fn scope_attr(self) -> &'static str {
        match self {
            Self::Platform => "data-tabs-id",
            Self::Language => "data-platform-id",
        }
    }
}

/// Kind of container, selecting the root class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// `platformtabs`: platform tabs with plain content.
    PlatformTabs,
    /// `codesample`: platform tabs with nested language tabs.
    CodeSample,
}

impl ContainerKind {
    /// Class on the container root element.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        match self {
            Self::PlatformTabs => classes::PLATFORM_CONTAINER,
            Self::CodeSample => classes::CODE_SAMPLE_CONTAINER,
        }
    }

    /// Prefix for generated container ids.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::PlatformTabs => "platform-tabs",
            Self::CodeSample => "code-sample",
        }
    }

    /// Marker keyword in `<!-- KEYWORD id="..." -->`.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::PlatformTabs => "platformtabs",
            Self::CodeSample => "codesample",
        }
    }
}

/// One header button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tab {
    /// Branch name, used as label and name attribute.
    pub name: String,
    /// Font Awesome icon class, platform level only.
    pub icon: Option<&'static str>,
    /// Id of the element that scopes this tab.
    pub scope: String,
    /// Whether the tab starts active.
    pub active: bool,
}

/// Body of a content pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaneBody {
    /// Normalized leaf content, embedded verbatim.
    Leaf(String),
    /// Nested tab set (language tabs inside a platform pane).
    Nested(TabSet),
}

/// One content pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pane {
    /// Branch name, used as name attribute.
    pub name: String,
    /// Element id, set on platform panes that own language tabs.
    pub id: Option<String>,
    /// Whether the pane starts active.
    pub active: bool,
    /// Pane content.
    pub body: PaneBody,
}

/// Header buttons and panes of one level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet {
    /// Level, selecting class and attribute names.
    pub level: Level,
    /// Header buttons, in branch order.
    pub tabs: Vec<Tab>,
    /// Panes, in branch order.
    pub panes: Vec<Pane>,
}

/// A rendered container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    /// Element id of the root.
    pub id: String,
    /// Container kind.
    pub kind: ContainerKind,
    /// Platform-level tab set.
    pub tabs: TabSet,
}

impl Container {
    /// Serialize to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(1024);
        self.write_html(&mut out);
        out
    }

    /// Serialize to HTML, appending to `out`.
    pub fn write_html(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<div class="{}" id="{}">"#,
            self.kind.root_class(),
            escape_html(&self.id)
        );
        self.tabs.write_html(out);
        out.push_str("</div>");
    }
}

impl TabSet {
    fn write_html(&self, out: &mut String) {
        let level = self.level;

        let _ = write!(out, r#"<div class="{}">"#, level.header_class());
        for tab in &self.tabs {
            let name = escape_html(&tab.name);
            let _ = write!(
                out,
                r#"<button class="{}{}" {}="{name}" {}="{}">"#,
                level.tab_class(),
                active_suffix(tab.active),
                level.name_attr(),
                level.scope_attr(),
                escape_html(&tab.scope),
            );
            if let Some(icon) = tab.icon {
                let _ = write!(out, r#"<i class="fa {icon}"></i> "#);
            }
            out.push_str(&name);
            out.push_str("</button>");
        }
        out.push_str("</div>");

        let _ = write!(out, r#"<div class="{}">"#, level.body_class());
        for pane in &self.panes {
            let _ = write!(
                out,
                r#"<div class="{}{}" {}="{}""#,
                level.pane_class(),
                active_suffix(pane.active),
                level.name_attr(),
                escape_html(&pane.name),
            );
            if let Some(id) = &pane.id {
                let _ = write!(out, r#" id="{}""#, escape_html(id));
            }
            out.push('>');
            match &pane.body {
                PaneBody::Leaf(content) => out.push_str(content),
                PaneBody::Nested(nested) => nested.write_html(out),
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
    }
}

fn active_suffix(active: bool) -> &'static str {
    if active { " active" } else { "" }
}

/// Escape text for use in HTML element content and quoted attribute values.
///
/// # Example
///
/// ```
/// use ptabs_renderer::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
/// assert_eq!(escape_html("Android"), "Android");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
