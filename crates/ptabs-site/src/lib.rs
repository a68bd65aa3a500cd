//! Static site building with platform tabs.
//!
//! Stands in for a documentation host: markdown pages are rendered with
//! `pulldown-cmark`, every page is passed through
//! [`ptabs_renderer::rewrite_page`], and the stylesheet and client script
//! are written next to the pages.
//!
//! ```no_run
//! use ptabs_site::{SiteBuilder, SiteConfig};
//!
//! let report = SiteBuilder::new(SiteConfig {
//!     source_dir: "docs".into(),
//!     output_dir: "_site".into(),
//!     default_platform: "Android".to_owned(),
//! })
//! .build()?;
//! println!("{} pages, {} containers", report.pages, report.containers);
//! # Ok::<(), ptabs_site::BuildError>(())
//! ```

mod builder;
mod error;
mod page;
mod template;

pub use builder::{ASSETS_DIR, BuildReport, SiteBuilder, SiteConfig};
pub use error::BuildError;
pub use page::{PageRenderResult, render_markdown};
