//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

/// Project-local config location, relative to the working directory
const LOCAL_CONFIG_PATH: &str = ".verse-quest/config.toml";

impl Config {
    /// Get the global config directory path (~/.verse-quest/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".verse-quest")
    }

    /// Get the global config file path (~/.verse-quest/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Project-local config path inside `dir`
    pub fn local_config_path(dir: &Path) -> PathBuf {
        dir.join(LOCAL_CONFIG_PATH)
    }

    /// Load configuration from a directory
    /// Looks for: .verse-quest/config.toml, then the global config.
    /// Falls back to defaults when neither exists.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let local_path = Self::local_config_path(dir);
        if local_path.exists() {
            tracing::debug!("Loading config from {}", local_path.display());
            return Self::from_file(&local_path);
        }

        let global_path = Self::global_config_path();
        if global_path.exists() {
            tracing::debug!("Loading config from {}", global_path.display());
            return Self::from_file(&global_path);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration, preferring an explicit path when given
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_dir(work_dir),
        }
    }

    /// Write config file content with an atomic write.
    ///
    /// The content goes to a temp file first and is renamed over the target,
    /// so a crash never leaves a half-written config behind. The parent
    /// directory is created if needed.
    pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let temp_path = path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

        temp_file
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", temp_path.display()))?;

        temp_file
            .sync_all()
            .with_context(|| "Failed to sync config file")?;

        std::fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

        Ok(())
    }
}
