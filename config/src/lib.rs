//! Configuration for saaty.
//!
//! Reads `~/.saaty/config.toml` and resolves it, together with environment
//! overrides, into [`Settings`]. A missing file is not an error.

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use saaty_types::{ReportFormat, UiOptions};

/// Decimal places printed in the text report when not configured.
pub const DEFAULT_PRECISION: usize = 6;
/// Upper bound on configured precision; more digits are noise for f64.
pub const MAX_PRECISION: usize = 15;

#[derive(Debug, Default, Deserialize)]
pub struct SaatyConfig {
    pub app: Option<AppConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the selection marker and key hints.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Set to false for plain-text rendering.
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// "text" or "json".
    pub format: Option<String>,
    pub precision: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl SaatyConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".saaty").join("config.toml"))
}

/// Environment variables that override the config file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// `SAATY_REPORT`
    pub report: Option<String>,
    /// `NO_COLOR` set to a non-empty value
    pub no_color: bool,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            report: env::var("SAATY_REPORT").ok(),
            no_color: env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub ui: UiOptions,
    pub report_format: ReportFormat,
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            report_format: ReportFormat::Text,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Settings {
    /// Config file values first, then environment overrides on top.
    #[must_use]
    pub fn resolve(config: Option<&SaatyConfig>, overrides: &EnvOverrides) -> Self {
        let mut settings = Settings::default();

        if let Some(app) = config.and_then(|cfg| cfg.app.as_ref()) {
            settings.ui.ascii_only = app.ascii_only;
            settings.ui.high_contrast = app.high_contrast;
            settings.ui.color = app.color.unwrap_or(true);
        }

        if let Some(report) = config.and_then(|cfg| cfg.report.as_ref()) {
            if let Some(raw) = report.format.as_deref() {
                match ReportFormat::parse(raw) {
                    Some(format) => settings.report_format = format,
                    None => tracing::warn!("Unknown report format in config: {}", raw),
                }
            }
            if let Some(precision) = report.precision {
                settings.precision = precision.min(MAX_PRECISION);
            }
        }

        if let Some(raw) = overrides.report.as_deref() {
            match ReportFormat::parse(raw) {
                Some(format) => settings.report_format = format,
                None => tracing::warn!("Ignoring unknown SAATY_REPORT value: {}", raw),
            }
        }
        if overrides.no_color {
            settings.ui.color = false;
        }

        settings
    }
}
