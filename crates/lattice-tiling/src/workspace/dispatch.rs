//! Command dispatch for the Workspace.

use lattice_common::TilingError;

use crate::binding::DocumentBinding;
use crate::commands::TilingCommand;
use crate::tree::Direction;

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Execute a tiling command against the focused pane. Returns whether
    /// the tree or focus changed.
    pub fn execute(&mut self, command: TilingCommand) -> Result<bool, TilingError> {
        match command {
            TilingCommand::SplitHorizontal => self.split_focused(Direction::Horizontal).map(|_| true),
            TilingCommand::SplitVertical => self.split_focused(Direction::Vertical).map(|_| true),
            TilingCommand::Close => self.close_focused().map(|_| true),
            TilingCommand::FocusNext => Ok(self.focus_next()),
            TilingCommand::FocusPrev => Ok(self.focus_prev()),
            TilingCommand::Focus(pane) => self.select(pane).map(|_| true),
        }
    }
}
