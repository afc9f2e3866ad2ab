use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV_VAR: &str = "PORTFOLIO_SHELL_CONFIG";

const APP_DIR: &str = "portfolio-shell";

/// Resolve the config file path: `$PORTFOLIO_SHELL_CONFIG`, else
/// `<config dir>/portfolio-shell/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// Default log file for interactive mode: `<data dir>/portfolio-shell/portfolio-shell.log`
pub fn default_log_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().context("Could not determine the user data directory")?;
    Ok(data_dir.join(APP_DIR).join("portfolio-shell.log"))
}
