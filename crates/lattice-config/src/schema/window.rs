//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial workspace size (valid range: 16-10000 on each axis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
        }
    }
}
