//! Configuration loading and management

mod io;
mod settings;

pub use settings::{HeartsSettings, QuizSettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hearts resource settings
    #[serde(default)]
    pub hearts: HeartsSettings,

    /// Quiz scoring settings
    #[serde(default)]
    pub quiz: QuizSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting converts to a valid engine value
    pub fn validate(&self) -> Result<()> {
        self.hearts
            .to_hearts_config()
            .context("Invalid [hearts] settings")?;
        self.quiz
            .validated_base_points()
            .context("Invalid [quiz] settings")?;
        Ok(())
    }
}
