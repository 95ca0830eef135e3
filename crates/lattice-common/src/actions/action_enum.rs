use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the shell.
///
/// Keybinds and the scripted driver both resolve to an `Action`; the
/// shell matches on it to route into the workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Pane / Tiling --
    SplitHorizontal,
    SplitVertical,
    ClosePane,
    FocusNextPane,
    FocusPrevPane,
    ResizeWorkspace { width: i32, height: i32 },

    // -- Document --
    ReloadDocument,

    // -- Window --
    Quit,

    // -- Noop --
    None,
}
