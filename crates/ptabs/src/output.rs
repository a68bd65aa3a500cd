//! Colored status lines on stderr.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use ptabs_site::BuildReport;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    label: Style,
    green: Style,
    yellow: Style,
    red: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().dim(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print a `Label: path` line.
    pub(crate) fn path(&self, label: &str, path: &Path) {
        self.line(format_args!(
            "{} {}",
            self.label.apply_to(format!("{label}:")),
            path.display()
        ));
    }

    /// Print build warnings followed by the summary line.
    pub(crate) fn report(&self, report: &BuildReport, output_dir: &Path) {
        for warning in &report.warnings {
            self.line(self.yellow.apply_to(format!("Warning: {warning}")));
        }
        self.line(self.green.apply_to(summary(report, output_dir)));
    }

    /// Print an error (red).
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(self.red.apply_to(format!("Error: {err}")));
    }

    fn line(&self, msg: impl Display) {
        let _ = self.term.write_line(&msg.to_string());
    }
}

fn summary(report: &BuildReport, output_dir: &Path) -> String {
    format!(
        "Built {} with {} to {}",
        count(report.pages, "page"),
        count(report.containers, "tab container"),
        output_dir.display()
    )
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_summary_pluralizes() {
        let report = BuildReport {
            pages: 1,
            containers: 3,
            ..BuildReport::default()
        };

        assert_eq!(
            summary(&report, Path::new("_site")),
            "Built 1 page with 3 tab containers to _site"
        );
    }

    #[test]
    fn test_summary_empty_site() {
        assert_eq!(
            summary(&BuildReport::default(), Path::new("out")),
            "Built 0 pages with 0 tab containers to out"
        );
    }
}
