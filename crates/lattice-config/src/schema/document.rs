use serde::{Deserialize, Serialize};

/// Content shown in a freshly created pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub welcome_url: String,
    pub welcome_text: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            welcome_url: "about:welcome".into(),
            welcome_text: "Welcome to Lattice.\nCtrl+H splits horizontally, Ctrl+V vertically, Ctrl+X closes."
                .into(),
        }
    }
}
