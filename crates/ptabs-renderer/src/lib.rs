//! Switchable platform and language tabs for documentation pages.
//!
//! Authors mark up alternatives with HTML comments that survive markdown
//! rendering:
//!
//! ```text
//! <!-- codesample id="init" -->
//! <!-- platform: Android -->
//! <!-- lang: Kotlin --> ... <!-- /lang -->
//! <!-- lang: Java --> ... <!-- /lang -->
//! <!-- /platform -->
//! <!-- platform: iOS --> ... <!-- /platform -->
//! <!-- /codesample -->
//! ```
//!
//! # Architecture
//!
//! - [`BlockKind::scan`]: extracts `platform` or `lang` blocks from a text span
//! - [`normalize_content`]: strips an incidental `<p>` wrapper from leaf content
//! - [`DefaultBranch`]: chooses the branch that starts active
//! - [`build_container`]: composes the above into a typed [`Container`]
//! - [`rewrite_page`]: replaces every container in a page with its HTML
//!
//! Generated container ids come from a [`BuildContext`] owned by the caller
//! for the duration of one build.
//!
//! # Example
//!
//! ```
//! use ptabs_renderer::{BuildContext, rewrite_page};
//!
//! let mut ctx = BuildContext::new("Android");
//! let page = concat!(
//!     "<!-- platformtabs -->",
//!     "<!-- platform: iOS --><p>Use CocoaPods.</p><!-- /platform -->",
//!     "<!-- platform: Android --><p>Use Gradle.</p><!-- /platform -->",
//!     "<!-- /platformtabs -->",
//! );
//!
//! let result = rewrite_page(&mut ctx, page);
//!
//! assert!(result.html.contains(r#"id="platform-tabs-1""#));
//! assert!(result.html.contains(
//!     r#"<div class="platform-content active" data-platform="Android">Use Gradle.</div>"#
//! ));
//! ```

mod block;
mod context;
mod icons;
pub mod markup;
mod normalize;
mod rewrite;
mod select;
mod tree;

pub use block::{BlockKind, Branch, PlatformBranch};
pub use context::{BuildContext, DEFAULT_PLATFORM};
pub use icons::{DEFAULT_ICON, platform_icon};
pub use markup::{Container, ContainerKind, EMPTY_CONTAINER_HTML, Level, escape_html};
pub use normalize::normalize_content;
pub use rewrite::{RewriteResult, rewrite_page};
pub use select::DefaultBranch;
pub use tree::{build_container, platform_pane_id, render_container};
