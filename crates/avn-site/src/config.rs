//! Configuration loading and typed config structures for `avn-site`.
//!
//! Settings live in `avn-site.yaml` (or the file named by `--config` /
//! `AVN_CONFIG`). Every field has a default, so a missing file or an empty
//! document yields a working configuration. Two environment variables
//! override individual fields after the file is read:
//!
//! - `AVN_STORE_PATH` overrides `storage.path`
//! - `AVN_LOG_LEVEL` overrides `logging.level`

use std::path::{Path, PathBuf};

use avn_render::RenderOptions;
use serde::Deserialize;

/// File read when no config path is given and it exists in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "avn-site.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but cannot be used.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level site configuration, mirroring `avn-site.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Where content is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Rendering fallbacks and formats.
    #[serde(default)]
    pub render: RenderConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SiteConfig {
    /// Load configuration for a run.
    ///
    /// Reads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else
    /// starts from defaults. Environment overrides are applied last and the
    /// result is validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if an explicitly named file cannot be read,
    /// [`ConfigError::Yaml`] for malformed YAML, or [`ConfigError::Invalid`]
    /// if a value is unusable.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if default_path.is_file() => Self::from_file(default_path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document gives the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `AVN_STORE_PATH` and `AVN_LOG_LEVEL` as returned by `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(path) = present("AVN_STORE_PATH") {
            self.storage.path = PathBuf::from(path);
        }
        if let Some(level) = present("AVN_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Check values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::File
            && self.storage.path.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid {
                field: "storage.path",
                reason: String::from("file backend needs a path"),
            });
        }
        if self.storage.quota_bytes == Some(0) {
            return Err(ConfigError::Invalid {
                field: "storage.quota_bytes",
                reason: String::from("must be greater than zero"),
            });
        }
        if self.render.upcoming_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "render.upcoming_limit",
                reason: String::from("must be greater than zero"),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Storage
// =============================================================================

/// Which key-value backend holds the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A JSON file on disk, kept across runs.
    #[default]
    File,
    /// Process memory only: a dry run. Every run starts empty and writes are
    /// discarded on exit, which suits trying out record files and templates.
    Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Backend kind.
    #[serde(default)]
    pub backend: StorageBackend,

    /// File backing the `file` backend.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Byte limit for the `memory` backend, mimicking browser storage quotas.
    /// A dry run with a quota shows whether a write would fit.
    #[serde(default)]
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_store_path(),
            quota_bytes: None,
        }
    }
}

// =============================================================================
// Render
// =============================================================================

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderConfig {
    /// Directory whose templates override the built-in ones.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// `chrono` format for article dates.
    #[serde(default = "default_short_date_format")]
    pub short_date_format: String,

    /// `chrono` format for event dates.
    #[serde(default = "default_long_date_format")]
    pub long_date_format: String,

    /// Image shown for articles without one.
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,

    /// Number of events in the home page's upcoming list.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            short_date_format: default_short_date_format(),
            long_date_format: default_long_date_format(),
            fallback_image: default_fallback_image(),
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

impl RenderConfig {
    /// Renderer options with this section's values applied.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            fallback_article_image: self.fallback_image.clone(),
            short_date_format: self.short_date_format.clone(),
            long_date_format: self.long_date_format.clone(),
            ..RenderOptions::default()
        }
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// =============================================================================
// Defaults
// =============================================================================

fn default_store_path() -> PathBuf {
    PathBuf::from("avn-site-data.json")
}

fn default_short_date_format() -> String {
    RenderOptions::default().short_date_format
}

fn default_long_date_format() -> String {
    RenderOptions::default().long_date_format
}

fn default_fallback_image() -> String {
    RenderOptions::default().fallback_article_image
}

const fn default_upcoming_limit() -> usize {
    avn_store::query::HOME_UPCOMING_LIMIT
}

fn default_log_level() -> String {
    String::from("info")
}
