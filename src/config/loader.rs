//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsConfig,

    #[serde(default)]
    pub user: UserConfig,

    #[serde(default)]
    pub io: IoConfig,
}

/// Service settings: host and crawl range.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsConfig {
    /// Base URL of the diary service, e.g. "http://my365.in".
    #[serde(default)]
    pub host: String,

    /// Oldest year to crawl back to (inclusive).
    #[serde(default)]
    pub first_year: i32,

    /// Oldest month to crawl back to (inclusive, 1-12).
    #[serde(default)]
    pub first_month: u32,

    /// Timeout for image downloads, in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_seconds: u64,
}

/// Account credentials configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    /// Account ID used both for login and in post URLs.
    #[serde(default)]
    pub account: String,

    /// Account password.
    #[serde(default)]
    pub password: String,
}

/// Output locations configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IoConfig {
    /// Directory the downloaded images are written into.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Path of the manifest CSV listing every (date, image URL) pair.
    #[serde(default = "default_imagelist")]
    pub imagelist: PathBuf,
}

fn default_download_timeout() -> u64 {
    10
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("images")
}

fn default_imagelist() -> PathBuf {
    PathBuf::from("imagelist.csv")
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            first_year: 0,
            first_month: 0,
            download_timeout_seconds: default_download_timeout(),
        }
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            imagelist: default_imagelist(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Base URL with any trailing slash removed.
    pub fn host(&self) -> &str {
        self.settings.host.trim_end_matches('/')
    }
}
