//! Configuration management for the dashboard host

use crate::banner::DisplayArgs;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Host configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Poll interval in milliseconds for the event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Pixels represented by one terminal row when translating reported
    /// banner heights into layout rows
    #[serde(default = "default_px_per_row")]
    pub px_per_row: u32,

    /// Display-argument presets the host cycles through on refresh
    #[serde(default = "default_presets")]
    pub presets: Vec<DisplayArgs>,
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_px_per_row() -> u32 {
    20
}

fn default_presets() -> Vec<DisplayArgs> {
    vec![
        DisplayArgs::new("Introducing GPT-5"),
        DisplayArgs::new("Chromebook LLM Chat").subtitle("Powered by Science & Magic."),
        DisplayArgs::new("Plain announcements")
            .subtitle("Gradient off for low-color terminals")
            .gradient(false),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval(),
            px_per_row: default_px_per_row(),
            presets: default_presets(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// Falls back to the defaults when no config file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Default config file location
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marquee")
            .join("config.json")
    }

    /// Terminal rows needed for a reported height of `px` pixels
    #[must_use]
    pub fn rows_for(&self, px: u32) -> u16 {
        let per_row = self.px_per_row.max(1);
        u16::try_from(px.div_ceil(per_row)).unwrap_or(u16::MAX)
    }
}
