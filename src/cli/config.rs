//! TOML configuration file support.
//!
//! Column classification and anchor columns can be adjusted without code
//! changes:
//!
//! ```toml
//! # isatab.toml
//! [parser]
//! study_anchors = ["Source Name", "Sample Name"]
//!
//! [parser.header.synonyms]
//! "Scan Data File" = "Raw Data File"
//! ```

use anyhow::{Context, Result};
use isatab::ParserConfig;
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for isatab.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Parser settings.
    #[serde(default)]
    pub parser: ParserConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
