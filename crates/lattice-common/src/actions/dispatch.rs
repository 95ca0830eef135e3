use super::Action;

impl Action {
    /// Human-readable label for display in menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::SplitHorizontal => "Split Horizontal",
            Action::SplitVertical => "Split Vertical",
            Action::ClosePane => "Close Pane",
            Action::FocusNextPane => "Focus Next Pane",
            Action::FocusPrevPane => "Focus Previous Pane",
            Action::ResizeWorkspace { .. } => "Resize Workspace",
            Action::ReloadDocument => "Reload Document",
            Action::Quit => "Quit",
            Action::None => "None",
        }
    }

    /// Actions that change the shape of the pane tree.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Action::SplitHorizontal | Action::SplitVertical | Action::ClosePane
        )
    }

    /// All actions that should appear in the command menu.
    pub fn palette_actions() -> Vec<Action> {
        vec![
            Action::SplitHorizontal,
            Action::SplitVertical,
            Action::ClosePane,
            Action::FocusNextPane,
            Action::FocusPrevPane,
            Action::ReloadDocument,
            Action::Quit,
        ]
    }
}
