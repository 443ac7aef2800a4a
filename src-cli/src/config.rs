//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use readalong_core::TimingConfig;
use readalong_editor::EditorConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadalongConfig {
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

/// Default config file location
pub fn config_path() -> Result<PathBuf> {
    ProjectDirs::from("", "", "readalong")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .context("Could not determine config directory")
}

/// Load the config from `explicit`, or from the default location.
///
/// A missing default file means defaults; a missing explicit file is an
/// error.
pub fn load_config(explicit: Option<&Path>) -> Result<ReadalongConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = config_path()?;
            if !path.exists() {
                return Ok(ReadalongConfig::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ReadalongConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}
