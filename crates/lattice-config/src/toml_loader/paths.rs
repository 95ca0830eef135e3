//! Where the config file lives, and writing the first one.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use lattice_common::ConfigError;
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable that points lattice at a specific config file.
pub const CONFIG_PATH_ENV: &str = "LATTICE_CONFIG";

const APP_DIR: &str = "lattice";
const CONFIG_FILE: &str = "config.toml";

/// `$LATTICE_CONFIG` when set and non-empty, otherwise
/// `<platform config dir>/lattice/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

fn resolve_config_path(
    override_path: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "could not determine config directory; set {CONFIG_PATH_ENV}"
            ))
        })
}

/// Write the commented default config to `path`, creating parent
/// directories. An existing file is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!("cannot create {}: {e}", parent.display()))
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already present at {}", path.display());
            return Ok(());
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot write default config to {}: {e}",
                path.display()
            )))
        }
    };
    file.write_all(default_config_toml().as_bytes()).map_err(|e| {
        ConfigError::ParseError(format!(
            "cannot write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
