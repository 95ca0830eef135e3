//! Core TOML config loading: read from path or platform default.

use crate::schema::LatticeConfig;
use crate::validation;
use lattice_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. If the result fails validation, a
/// warning is logged and the defaults are returned instead.
pub fn load_from_path(path: &Path) -> Result<LatticeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = parse_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("invalid config at {}: {e}; using defaults", path.display());
        return Ok(LatticeConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse TOML text without validating it.
pub fn parse_str(content: &str) -> Result<LatticeConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/lattice/config.toml`
/// On macOS: `~/Library/Application Support/lattice/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<LatticeConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(LatticeConfig::default())
        }
        Err(e) => Err(e),
    }
}
