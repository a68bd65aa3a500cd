//! `ptabs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use ptabs_config::{CliSettings, Config};
use ptabs_site::{SiteBuilder, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover ptabs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Platform shown first in every container (overrides config).
    #[arg(long, env = "PTABS_DEFAULT_PLATFORM")]
    pub(crate) default_platform: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            default_platform: self.default_platform,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config = ?config.config_path,
            default_platform = %config.tabs.default_platform,
            "Configuration loaded"
        );

        if let Some(path) = &config.config_path {
            output.path("Config", path);
        }
        output.path("Source", &config.docs_resolved.source_dir);
        output.path("Output", &config.docs_resolved.output_dir);

        let builder = SiteBuilder::new(SiteConfig {
            source_dir: config.docs_resolved.source_dir.clone(),
            output_dir: config.docs_resolved.output_dir.clone(),
            default_platform: config.tabs.default_platform.clone(),
        });
        let report = builder.build()?;

        output.report(&report, &config.docs_resolved.output_dir);
        Ok(())
    }
}
