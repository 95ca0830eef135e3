//! Focus handling for the Workspace.

use lattice_common::{PaneId, TilingError, WorkspaceEvent};

use crate::binding::DocumentBinding;

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Move focus to a leaf and make its document current.
    pub fn set_focused(&mut self, pane: PaneId) -> Result<(), TilingError> {
        let document = self
            .arena
            .get(pane)?
            .as_leaf()
            .ok_or(TilingError::unsupported("set_focused", pane))?
            .document();
        if self.focused == pane {
            return Ok(());
        }
        self.focused = pane;
        self.bindings.set_current(document);
        tracing::debug!(%pane, %document, "focus changed");
        self.emit(WorkspaceEvent::PaneFocused(pane));
        Ok(())
    }

    /// Focus `pane`, or for a split, the leaf under it that should get
    /// focus: the current one if it lies inside, otherwise the first leaf.
    /// Returns the leaf that ends up focused.
    pub fn select(&mut self, pane: PaneId) -> Result<PaneId, TilingError> {
        let node = self.arena.get(pane)?;
        let leaf = if node.is_leaf() {
            pane
        } else if self.arena.is_ancestor_or_self(pane, self.focused) {
            self.focused
        } else {
            self.arena.first_leaf(pane)
        };
        self.set_focused(leaf)?;
        Ok(leaf)
    }

    /// True for the focused leaf and every split above it.
    pub fn has_focus(&self, pane: PaneId) -> bool {
        self.arena.contains(pane) && self.arena.is_ancestor_or_self(pane, self.focused)
    }

    /// Focus the next leaf in depth-first order, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        match self.arena.next_leaf(self.root, self.focused) {
            Some(next) => self.set_focused(next).is_ok(),
            None => false,
        }
    }

    /// Focus the previous leaf in depth-first order, wrapping around.
    pub fn focus_prev(&mut self) -> bool {
        match self.arena.prev_leaf(self.root, self.focused) {
            Some(prev) => self.set_focused(prev).is_ok(),
            None => false,
        }
    }
}
