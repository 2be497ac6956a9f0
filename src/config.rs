//! Configuration module
//!
//! Loads `~/.config/glossa/config.toml`, falling back to defaults for any
//! missing file or field.

mod loader;
pub mod types;

pub use loader::{config_dir, config_path, load_config, load_config_from_path, parse_config};
pub use types::{ApiConfig, Config, LocaleConfig, SearchConfig};
