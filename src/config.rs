//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing default file means defaults; any other problem also means
//! defaults, plus a warning the UI can show.

use std::path::{Path, PathBuf};

use crate::error::AppError;

mod types;

pub use types::{AutocompleteConfig, Config, EndpointConfig};

const APP_DIR: &str = "storefront-autocomplete";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the config file
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// `<config_dir>/storefront-autocomplete/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the configuration, never failing
///
/// An explicit `path` that does not exist is reported; a missing default file
/// is not.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => {
                return ConfigResult {
                    config: Config::default(),
                    warning: None,
                };
            }
        },
    };

    if !explicit && !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Read and parse one config file
pub fn read_config(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content).map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
