//! Configuration schema types for Lattice.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod document;
mod keybind_config;
mod layout;
mod system;
mod window;

pub use document::*;
pub use keybind_config::*;
pub use layout::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Lattice.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    pub layout: LayoutConfig,
    pub window: WindowConfig,
    pub keybinds: KeybindConfig,
    pub document: DocumentConfig,
    pub logging: LoggingConfig,
}
