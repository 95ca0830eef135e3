//! Split geometry configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Separator hit-zone thickness in cells (valid range: 1-32). Also the
    /// smallest size a pane can be dragged down to.
    pub separator_thickness: u32,
    /// Share given to the original pane when it is split (valid range: 0.1-0.9).
    pub default_split_fraction: f64,
    /// Focus border width; 0 disables the border (valid range: 0-8).
    pub focus_border_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            separator_thickness: 4,
            default_split_fraction: 0.5,
            focus_border_width: 1,
        }
    }
}
