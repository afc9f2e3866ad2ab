//! Configuration loading.
//!
//! The shell reads an optional TOML file. Every key has a built-in default, so a missing
//! default-location file is not an error; a file named explicitly with `--config` must exist.
//!
//! `shell.about` and `shell.skills` replace the built-in `about` and `skills` blocks, so
//! the same binary can front a different portfolio without a rebuild.
//!
//! ```toml
//! [api]
//! base_url = "https://example.com/api"
//! timeout_secs = 10
//!
//! [shell]
//! history_limit = 100
//! about = "..."
//! skills = "..."
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/portfolio-shell.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::utils::default_config_path;

/// Overrides `api.base_url` when set
pub const API_URL_ENV_VAR: &str = "PORTFOLIO_API_URL";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout_secs() }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShellConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Replaces the built-in `about` block
    #[serde(default)]
    pub about: Option<String>,
    /// Replaces the built-in `skills` block
    #[serde(default)]
    pub skills: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self { history_limit: default_history_limit(), about: None, skills: None }
    }
}

fn default_history_limit() -> usize {
    100
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level(), file: None }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Parse and validate a config document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Load from an explicit path, or from the default location if present, else defaults.
    /// `PORTFOLIO_API_URL` is applied on top.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = default_config_path()?;
                if path.exists() { Self::from_file(&path)? } else { Self::default() }
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV_VAR)
            && !url.trim().is_empty()
        {
            config.api.base_url = url;
        }

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("api.base_url must be an http(s) URL, got '{}'", self.api.base_url);
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be greater than zero");
        }
        if self.shell.history_limit == 0 {
            bail!("shell.history_limit must be greater than zero");
        }
        Ok(())
    }
}
