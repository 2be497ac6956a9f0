use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::GlossaError;

const CONFIG_DIR: &str = "glossa";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV: &str = "GLOSSA_API_URL";

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the user config, applying the environment override
pub fn load_config() -> Result<Config, GlossaError> {
    let mut config = match config_path() {
        Some(path) => load_config_from_path(&path)?,
        None => Config::default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV)
        && !url.trim().is_empty()
    {
        config.api.base_url = url.trim().to_string();
    }

    Ok(config)
}

/// Load a config file; a missing file yields defaults
pub fn load_config_from_path(path: &Path) -> Result<Config, GlossaError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map_err(|message| GlossaError::Config {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.to_string())
}
