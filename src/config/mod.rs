//! Configuration management for rsr.
//!
//! Configuration is read from `~/.config/rsr/config.toml`. If the file
//! doesn't exist, a default configuration with comments is created.
//! `MAX_ENTRIES` in the environment overrides the per-feed cap.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::normalizer::DEFAULT_MAX_ENTRIES;

pub const MAX_ENTRIES_ENV: &str = "MAX_ENTRIES";

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line-delimited list of feed URLs
    pub feeds_file: PathBuf,
    /// Entries kept per feed
    pub max_entries: usize,
    pub fetch: FetchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds_file: PathBuf::from("feeds.txt"),
            max_entries: DEFAULT_MAX_ENTRIES,
            fetch: FetchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "rsr/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, then apply the environment.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Self::default().apply_env();
        }

        Self::load_from(&config_path)?.apply_env()
    }

    /// Load configuration from an explicit file. The environment is not consulted.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply `MAX_ENTRIES` from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        let value = std::env::var(MAX_ENTRIES_ENV).ok();
        self.apply_max_entries(value.as_deref())
    }

    fn apply_max_entries(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            self.max_entries = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: MAX_ENTRIES_ENV,
                    value: value.to_string(),
                })?;
        }
        Ok(self)
    }

    /// Get the default config file path: `~/.config/rsr/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("rsr").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> &'static str {
        r##"# rsr configuration

# File with one feed URL per line. Blank lines are ignored.
feeds_file = "feeds.txt"

# Entries kept from each feed before merging.
# The MAX_ENTRIES environment variable overrides this.
max_entries = 5

[fetch]
# Per-request timeout in seconds
timeout_secs = 10

user_agent = "rsr/0.1.0"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}
