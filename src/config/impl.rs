use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<StaticConfig> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to in-memory defaults when `init_config()` was never called.
pub fn get_config() -> &'static StaticConfig {
    CONFIG.get_or_init(StaticConfig::default)
}

/// Initialize the global configuration
///
/// Loads `config_path` (or the default location) plus environment
/// overrides. `data_file` takes precedence over every other source.
/// Later calls return the configuration from the first call.
pub fn init_config(
    config_path: Option<&Path>,
    data_file: Option<PathBuf>,
) -> Result<&'static StaticConfig> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let mut config = StaticConfig::load(config_path)?;
    if let Some(data_file) = data_file {
        config.storage.data_file = data_file;
    }
    Ok(CONFIG.get_or_init(|| config))
}
