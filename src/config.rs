use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Error;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub inline: InlineConfig,
    pub paragraph: ParagraphConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    pub bold_tag: String,
    pub italic_tag: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            bold_tag: "b".to_string(),
            italic_tag: "em".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParagraphConfig {
    pub line_break: String,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            line_break: "<br/>".to_string(),
        }
    }
}

impl Config {
    /// The configuration bundled with the crate (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file. Keys absent from the file keep their
    /// default values.
    pub fn load(path: &Path) -> Result<Self, Error> {
        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
