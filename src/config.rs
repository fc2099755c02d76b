//! Configuration module for Atlas

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme
    #[serde(default)]
    pub theme: Theme,

    /// API base URL (override for testing or a self-hosted mirror)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Whether to render flag/coat-of-arms images in the detail view
    #[serde(default = "default_show_flags")]
    pub show_flags: bool,

    /// Enable vim-like keybindings (hjkl navigation)
    #[serde(default = "default_vim_mode")]
    pub vim_mode: bool,
}

fn default_api_base_url() -> String {
    crate::api::DEFAULT_BASE_URL.to_string()
}

fn default_show_flags() -> bool {
    true
}

fn default_vim_mode() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            api_base_url: default_api_base_url(),
            show_flags: default_show_flags(),
            vim_mode: default_vim_mode(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("atlas");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        self.save_to(&path)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}
