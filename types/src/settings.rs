//! Resolved presentation settings shared across crates.
//!
//! Raw TOML structs (with `Option` fields) stay in `saaty-config`; the
//! loader resolves them into these types at the parse boundary.

use serde::{Deserialize, Serialize};

/// Terminal rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// When false, rendering uses no colors at all; only glyphs mark the selection.
    pub color: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            ascii_only: false,
            high_contrast: false,
            color: true,
        }
    }
}

/// Shape of the final report printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// Parses a user-supplied format name, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "table" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
