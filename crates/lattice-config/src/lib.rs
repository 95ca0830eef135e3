//! Lattice configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lattice_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use keybinds::{parse_keybind, KeyCombo};
pub use schema::{LatticeConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use lattice_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default location when
/// no path is given (creating a default file on first run).
pub fn load_config(path: Option<&Path>) -> Result<LatticeConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &LatticeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
