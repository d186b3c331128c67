//! Maintainer defaults for descriptor generation.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;

/// Author identity placed into generated descriptors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Author {
    pub given: String,
    pub family: String,
    pub email: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            given: "First".to_string(),
            family: "Last".to_string(),
            email: "first.last@example.com".to_string(),
        }
    }
}

/// Maintainer defaults loaded from the user's config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MaintainerConfig {
    pub author: Author,
    pub license: String,
}

impl Default for MaintainerConfig {
    fn default() -> Self {
        Self { author: Author::default(), license: "MIT".to_string() }
    }
}

impl MaintainerConfig {
    /// Path to the user-level config file.
    ///
    /// Uses $HOME/.config/pkgsmith for consistency across platforms and tests.
    pub fn path() -> Result<PathBuf, AppError> {
        let home = std::env::var("HOME")
            .map_err(|_| AppError::config_error("HOME environment variable not set"))?;
        Ok(PathBuf::from(home).join(".config").join("pkgsmith").join("config.toml"))
    }

    /// Load maintainer defaults, falling back to placeholders when no config
    /// file exists.
    pub fn load() -> Result<Self, AppError> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}
