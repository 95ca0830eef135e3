//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Alt, Shift, Super.
/// Multiple modifiers: "Ctrl+Shift+H".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub split_horizontal: String,
    pub split_vertical: String,
    pub close_pane: String,
    pub focus_next: String,
    pub focus_prev: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            split_horizontal: "Ctrl+H".into(),
            split_vertical: "Ctrl+V".into(),
            close_pane: "Ctrl+X".into(),
            focus_next: "Ctrl+N".into(),
            focus_prev: "Ctrl+P".into(),
        }
    }
}
