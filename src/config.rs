//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`OHARA_*`)
//! 2. Config file (`~/.ohara/config.toml`)
//! 3. Defaults

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Session key the page history blob is stored under.
pub const DEFAULT_SESSION_KEY: &str = "Ohara.Navigation.History";

/// Markup placed between breadcrumb entries.
pub const DEFAULT_SEPARATOR: &str = "<span> / </span> ";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Navigation configuration.
    pub navigation: NavigationConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding file-backed sessions.
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_ohara_home(),
        }
    }
}

/// Page history and breadcrumb configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NavigationConfig {
    /// Session key for the history blob.
    pub session_key: String,

    /// Separator between rendered breadcrumbs.
    pub separator: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            session_key: DEFAULT_SESSION_KEY.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Get the default ohara home directory.
fn default_ohara_home() -> PathBuf {
    dirs::home_dir().map_or_else(|| PathBuf::from(".ohara"), |h| h.join(".ohara"))
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path).map_err(Error::Storage)?;
        config = toml::from_str(&contents).map_err(|e| Error::Config(e.to_string()))?;
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("OHARA_CONFIG") {
        return PathBuf::from(path);
    }

    if let Ok(home) = env::var("OHARA_HOME") {
        return PathBuf::from(home).join("config.toml");
    }

    default_ohara_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(path) = env::var("OHARA_STORAGE_PATH") {
        config.storage.path = PathBuf::from(path);
    } else if let Ok(home) = env::var("OHARA_HOME") {
        config.storage.path = PathBuf::from(home);
    }

    if let Ok(key) = env::var("OHARA_SESSION_KEY") {
        if !key.is_empty() {
            config.navigation.session_key = key;
        }
    }

    if let Ok(separator) = env::var("OHARA_SEPARATOR") {
        config.navigation.separator = separator;
    }
}
