//! Configuration management for ptabs.
//!
//! Parses `ptabs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [docs]
//! source_dir = "docs"
//! output_dir = "_site"
//!
//! [tabs]
//! default_platform = "Android"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `tabs.default_platform` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
    /// Override the platform that starts active.
    pub default_platform: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ptabs.toml";

/// Platform that starts active when nothing is configured.
const DEFAULT_PLATFORM: &str = "Android";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documentation paths (relative strings from TOML).
    docs: DocsConfigRaw,
    /// Tab rendering configuration.
    pub tabs: TabsConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
}

/// Resolved documentation paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Directory holding the pages to build.
    pub source_dir: PathBuf,
    /// Directory the built site is written to.
    pub output_dir: PathBuf,
}

/// Tab rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Platform whose tab starts active in every container that defines it.
    pub default_platform: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default_platform: DEFAULT_PLATFORM.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`tabs.default_platform`").
        field: String,
        /// Error message (e.g., "${`DEFAULT_PLATFORM`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `ptabs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.docs_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(default_platform) = &settings.default_platform {
            self.tabs.default_platform.clone_from(default_platform);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            tabs: TabsConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                output_dir: base.join("_site"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.default_platform.trim().is_empty() {
            return Err(ConfigError::Validation(
                "tabs.default_platform cannot be empty".to_owned(),
            ));
        }
        if self.docs_resolved.source_dir == self.docs_resolved.output_dir {
            return Err(ConfigError::Validation(
                "docs.output_dir must differ from docs.source_dir".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.tabs.default_platform =
            expand::expand_env(&self.tabs.default_platform, "tabs.default_platform")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            output_dir: resolve(self.docs.output_dir.as_deref(), "_site"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.tabs.default_platform, "Android");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/test/_site"));
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tabs.default_platform, "Android");
    }

    #[test]
    fn test_parse_tabs_config() {
        let toml = r#"
[tabs]
default_platform = "iOS"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tabs.default_platform, "iOS");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "documentation"
output_dir = "public"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/documentation")
        );
        assert_eq!(
            config.docs_resolved.output_dir,
            PathBuf::from("/project/public")
        );
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/docs"));
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/project/_site"));
    }

    #[test]
    fn test_unknown_section_is_ignored() {
        let toml = r#"
[theme]
name = "dark"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.tabs.default_platform, "Android");
    }

    #[test]
    fn test_apply_cli_settings_default_platform() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            default_platform: Some("HarmonyOS".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.tabs.default_platform, "HarmonyOS");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs")); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_dirs() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            output_dir: Some(PathBuf::from("/custom/out")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/custom/docs"));
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/custom/out"));
        assert_eq!(config.tabs.default_platform, "Android"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.tabs.default_platform, "Android");
        assert_eq!(config.docs_resolved.output_dir, PathBuf::from("/test/_site"));
    }

    #[test]
    fn test_expand_env_vars_default_platform() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PTABS_TEST_PLATFORM", "iOS");
        }

        let toml = r#"
[tabs]
default_platform = "${PTABS_TEST_PLATFORM}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.tabs.default_platform, "iOS");

        unsafe {
            std::env::remove_var("PTABS_TEST_PLATFORM");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PTABS_MISSING_PLATFORM");
        }

        let toml = r#"
[tabs]
default_platform = "${PTABS_MISSING_PLATFORM}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("PTABS_MISSING_PLATFORM"));
        assert!(err.to_string().contains("tabs.default_platform"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_default_platform() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.tabs.default_platform = "  ".to_owned();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("tabs.default_platform"));
    }

    #[test]
    fn test_validate_output_equals_source() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.output_dir = PathBuf::from("/test/docs");

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("output_dir"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ptabs.toml");
        std::fs::write(
            &path,
            "[docs]\nsource_dir = \"pages\"\n\n[tabs]\ndefault_platform = \"iOS\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.tabs.default_platform, "iOS");
        assert_eq!(config.docs_resolved.source_dir, dir.path().join("pages"));
        assert_eq!(config.docs_resolved.output_dir, dir.path().join("_site"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_keeps_bare_dollar_platform() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ptabs.toml");
        std::fs::write(&path, "[tabs]\ndefault_platform = \"$Foo\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.tabs.default_platform, "$Foo");
    }

    #[test]
    fn test_load_applies_cli_settings_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ptabs.toml");
        std::fs::write(&path, "[tabs]\ndefault_platform = \"iOS\"\n").unwrap();
        let settings = CliSettings {
            default_platform: Some("HarmonyOS".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.tabs.default_platform, "HarmonyOS");
    }

    #[test]
    fn test_load_rejects_empty_cli_platform() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ptabs.toml");
        std::fs::write(&path, "").unwrap();
        let settings = CliSettings {
            default_platform: Some(String::new()),
            ..Default::default()
        };

        let result = Config::load(Some(&path), Some(&settings));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ptabs.toml");
        std::fs::write(&path, "[tabs\ndefault_platform = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
