//! Configuration
//!
//! Read from `~/.jsr373/config.json` (or an explicit path), then overridden by
//! the `JSR373_BASE_URL` environment variable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/jsr373";
pub const BASE_URL_ENV: &str = "JSR373_BASE_URL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("base URL must be an absolute http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Prefix of every template help URL
    pub base_url: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pretty: true,
        }
    }
}

/// Get the default config path (`~/.jsr373/config.json`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jsr373").join("config.json"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default path is used
    /// if present, otherwise built-in defaults. The environment override is
    /// applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!("No config at {:?}, using defaults", path);
                    Self::default()
                }
                None => {
                    warn!("Could not determine home directory, using default config");
                    Self::default()
                }
            },
        };

        config
            .with_overrides(std::env::var(BASE_URL_ENV).ok())
            .validated()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Replace the base URL when an override is given.
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            debug!("Overriding base URL with {}", base_url);
            self.base_url = base_url;
        }
        self
    }

    /// Check the base URL and store it without surrounding whitespace.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.base_url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() => {
                self.base_url = url.to_string();
                Ok(self)
            }
            _ => Err(ConfigError::InvalidBaseUrl(self.base_url)),
        }
    }
}
