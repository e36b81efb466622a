use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EbookError, EbookResult};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sections: SectionsConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Glyph that marks a line as a section heading.
    pub marker: String,
    /// Prepended to the section counter to form the anchor id.
    pub anchor_prefix: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            marker: "🔴".to_string(),
            anchor_prefix: "section-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title_prefix: String,
    pub toc_heading: String,
    pub lang: Option<String>,
    /// Appended after the built-in stylesheet.
    pub extra_css: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title_prefix: "电子书 - ".to_string(),
            toc_heading: "目录导读".to_string(),
            lang: None,
            extra_css: None,
        }
    }
}

impl Config {
    /// The bundled defaults. `build.rs` checks the file parses as TOML.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Missing tables and fields fall back to defaults.
    pub fn load(path: &Path) -> EbookResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| EbookError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| EbookError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EbookResult<()> {
        if self.sections.marker.trim().is_empty() {
            return Err(EbookError::InvalidConfig(
                "sections.marker must not be empty".to_string(),
            ));
        }
        if self.sections.anchor_prefix.is_empty() {
            return Err(EbookError::InvalidConfig(
                "sections.anchor_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
