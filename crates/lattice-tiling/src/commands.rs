use lattice_common::{Action, PaneId};

use crate::tree::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingCommand {
    SplitHorizontal,
    SplitVertical,
    Close,
    FocusNext,
    FocusPrev,
    Focus(PaneId),
}

impl TilingCommand {
    pub fn split(direction: Direction) -> Self {
        match direction {
            Direction::Horizontal => TilingCommand::SplitHorizontal,
            Direction::Vertical => TilingCommand::SplitVertical,
        }
    }

    /// The tiling command behind a user action, if it has one.
    pub fn from_action(action: &Action) -> Option<Self> {
        match action {
            Action::SplitHorizontal => Some(TilingCommand::SplitHorizontal),
            Action::SplitVertical => Some(TilingCommand::SplitVertical),
            Action::ClosePane => Some(TilingCommand::Close),
            Action::FocusNextPane => Some(TilingCommand::FocusNext),
            Action::FocusPrevPane => Some(TilingCommand::FocusPrev),
            _ => None,
        }
    }
}
