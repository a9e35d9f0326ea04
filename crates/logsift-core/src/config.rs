//! Configuration types for logsift.
//!
//! [`Config::load`] layers, in order: the embedded defaults,
//! `~/.config/logsift/config.toml` (created with the defaults if missing) and
//! an optional explicit file. [`Config::defaults`] returns the embedded
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[report]
format        = "text"
top_patterns  = 10
show_timeline = true
with_entries  = false

[input]
max_bytes = 268435456
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Output layout of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report format {0:?} (expected text or json)")]
pub struct ParseReportFormatError(pub String);

impl std::str::FromStr for ReportFormat {
    type Err = ParseReportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ParseReportFormatError(s.to_string())),
        }
    }
}

/// `[report]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    /// Number of clusters shown; 0 shows all.
    #[serde(default = "default_top_patterns")]
    pub top_patterns: usize,
    #[serde(default = "default_show_timeline")]
    pub show_timeline: bool,
    /// Include member entries of each cluster in JSON output.
    #[serde(default)]
    pub with_entries: bool,
}

fn default_top_patterns() -> usize { 10 }
fn default_show_timeline() -> bool { true }

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            top_patterns: default_top_patterns(),
            show_timeline: default_show_timeline(),
            with_entries: false,
        }
    }
}

/// `[input]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Inputs larger than this are refused before parsing.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

fn default_max_bytes() -> u64 { 256 * 1024 * 1024 }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config layered on top of the built-in defaults, then
    /// `explicit` on top of that. Creates the user config file with defaults
    /// if it does not exist. A missing `explicit` file is an error.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false));
        if let Some(explicit) = explicit {
            builder = builder.add_source(config::File::from(explicit).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("logsift")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
