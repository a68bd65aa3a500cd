//! Site builder.
//!
//! Walks the source directory, renders markdown pages, rewrites HTML pages
//! and copies everything else. A single [`BuildContext`] is shared by all
//! pages of a build, so generated container ids are unique site-wide and
//! restart at 1 on the next build.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ptabs_renderer::{BuildContext, rewrite_page};

use crate::error::BuildError;
use crate::page::render_markdown;
use crate::template::{self, PageData};

/// Output subdirectory for the stylesheet and client script.
pub const ASSETS_DIR: &str = "assets";

/// Configuration for [`SiteBuilder`].
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Directory containing markdown and HTML pages.
    pub source_dir: PathBuf,
    /// Directory receiving the built site.
    pub output_dir: PathBuf,
    /// Platform activated by default in every container.
    pub default_platform: String,
}

/// Summary of a completed build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Pages rendered or rewritten.
    pub pages: usize,
    /// Tab containers expanded across all pages.
    pub containers: usize,
    /// Files copied unchanged.
    pub copied: usize,
    /// Container warnings, prefixed with the page path.
    pub warnings: Vec<String>,
}

enum SourceKind {
    Markdown,
    Html,
    Other,
}

impl SourceKind {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("md" | "markdown") => Self::Markdown,
            Some("html" | "htm") => Self::Html,
            _ => Self::Other,
        }
    }
}

/// Builds a static site with platform tabs.
pub struct SiteBuilder {
    config: SiteConfig,
}

impl SiteBuilder {
    /// Create a builder for the given configuration.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Build configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Build the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the source directory is missing, the walk fails,
    /// or any file cannot be read or written. Empty tab containers are not
    /// errors; they are reported in [`BuildReport::warnings`].
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let source_dir = &self.config.source_dir;
        let output_dir = &self.config.output_dir;

        if !source_dir.is_dir() {
            return Err(BuildError::SourceNotFound(source_dir.clone()));
        }

        tracing::info!(
            source = %source_dir.display(),
            output = %output_dir.display(),
            "Building site"
        );

        fs::create_dir_all(output_dir).map_err(BuildError::io(output_dir))?;

        let mut ctx = BuildContext::new(self.config.default_platform.as_str());
        let mut report = BuildReport::default();

        // Compare canonical paths so an output dir nested in the source is
        // excluded however either path is spelled.
        let source_root = fs::canonicalize(source_dir).map_err(BuildError::io(source_dir))?;
        let excluded = fs::canonicalize(output_dir).map_err(BuildError::io(output_dir))?;

        // Only hidden entries are skipped; ignore files have no say over pages.
        let walker = WalkBuilder::new(&source_root)
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| entry.path() != excluded)
            .build();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(rel) = path.strip_prefix(&source_root) else {
                continue;
            };

            match SourceKind::of(path) {
                SourceKind::Markdown => {
                    self.build_markdown(&mut ctx, path, rel, &mut report)?;
                }
                SourceKind::Html => self.build_html(&mut ctx, path, rel, &mut report)?,
                SourceKind::Other => {
                    let dest = output_dir.join(rel);
                    ensure_parent(&dest)?;
                    fs::copy(path, &dest).map_err(BuildError::io(&dest))?;
                    report.copied += 1;
                }
            }
        }

        self.write_assets()?;

        tracing::info!(
            pages = report.pages,
            containers = report.containers,
            copied = report.copied,
            warnings = report.warnings.len(),
            "Site built"
        );

        Ok(report)
    }

    fn build_markdown(
        &self,
        ctx: &mut BuildContext,
        path: &Path,
        rel: &Path,
        report: &mut BuildReport,
    ) -> Result<(), BuildError> {
        let markdown = fs::read_to_string(path).map_err(BuildError::io(path))?;
        let result = render_markdown(ctx, &markdown);

        let fallback_title = rel
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prefix = template::root_prefix(depth(rel));
        let html = template::render_page(&PageData {
            title: result.title.as_deref().unwrap_or(&fallback_title),
            html_content: &result.html,
            root_prefix: &prefix,
        });

        let dest = self.config.output_dir.join(rel).with_extension("html");
        write_file(&dest, &html)?;

        record_page(report, rel, result.containers, result.warnings);
        Ok(())
    }

    fn build_html(
        &self,
        ctx: &mut BuildContext,
        path: &Path,
        rel: &Path,
        report: &mut BuildReport,
    ) -> Result<(), BuildError> {
        let page = fs::read_to_string(path).map_err(BuildError::io(path))?;
        let result = rewrite_page(ctx, &page);

        let dest = self.config.output_dir.join(rel);
        write_file(&dest, &result.html)?;

        record_page(report, rel, result.containers, result.warnings);
        Ok(())
    }

    fn write_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join(ASSETS_DIR);
        fs::create_dir_all(&assets_dir).map_err(BuildError::io(&assets_dir))?;

        for name in [ptabs_assets::STYLESHEET, ptabs_assets::SCRIPT] {
            let data =
                ptabs_assets::get(name).ok_or_else(|| BuildError::MissingAsset(name.to_owned()))?;
            let dest = assets_dir.join(name);
            fs::write(&dest, data.as_ref()).map_err(BuildError::io(&dest))?;
        }

        tracing::debug!(dir = %assets_dir.display(), "Wrote assets");
        Ok(())
    }
}

fn record_page(report: &mut BuildReport, rel: &Path, containers: usize, warnings: Vec<String>) {
    tracing::debug!(path = %rel.display(), containers, "Built page");

    for warning in warnings {
        tracing::warn!(path = %rel.display(), "{warning}");
        report.warnings.push(format!("{}: {warning}", rel.display()));
    }
    report.pages += 1;
    report.containers += containers;
}

/// Number of directories between the site root and the page.
fn depth(rel: &Path) -> usize {
    rel.components().count().saturating_sub(1)
}

fn ensure_parent(path: &Path) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    ensure_parent(path)?;
    fs::write(path, content).map_err(BuildError::io(path))
}
