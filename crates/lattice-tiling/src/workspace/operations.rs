//! Split and close on the Workspace.

use lattice_common::{PaneId, TilingError, WorkspaceEvent};

use crate::binding::DocumentBinding;
use crate::leaf::LeafPane;
use crate::split::SplitPane;
use crate::tree::{Direction, PaneNode};

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Split `target` in two. The original leaf becomes `first`, a new leaf
    /// bound to a duplicate of its document becomes `second`, and focus stays
    /// on the original. Splitting a split node splits the focused leaf.
    ///
    /// Returns the id of the new split node.
    pub fn split(&mut self, target: PaneId, direction: Direction) -> Result<PaneId, TilingError> {
        let leaf = self.resolve_split_target(target)?;
        let node = self.arena.get(leaf)?;
        let viewport = *node.viewport();
        let parent = node.parent();
        let document = self.document_of(leaf)?;

        // Everything fallible on the document side happens before the tree
        // is touched.
        let duplicate = self.bindings.duplicate(document)?;
        let content = match self.open_surface(duplicate) {
            Ok(content) => content,
            Err(err) => {
                self.bindings.release(duplicate);
                return Err(err);
            }
        };

        let created = self
            .arena
            .insert(PaneNode::leaf(viewport, LeafPane::new(duplicate, content)));
        let split = self.arena.insert(PaneNode::split(
            viewport,
            SplitPane::new(
                direction,
                leaf,
                created,
                self.options.default_fraction,
                self.options.separator_thickness,
            ),
        ));

        match parent {
            Some(parent) => self.arena.replace_child(parent, leaf, split)?,
            None => self.root = split,
        }
        self.arena.set_parent(leaf, Some(split))?;
        self.arena.set_parent(created, Some(split))?;
        self.propagate(split)?;

        tracing::debug!(%split, original = %leaf, %created, ?direction, "pane split");
        self.emit(WorkspaceEvent::PaneSplit {
            split,
            original: leaf,
            created,
        });
        Ok(split)
    }

    pub fn split_focused(&mut self, direction: Direction) -> Result<PaneId, TilingError> {
        self.split(self.focused, direction)
    }

    /// A leaf may only be split while it holds focus. A split node forwards
    /// the request to the focused leaf.
    fn resolve_split_target(&self, target: PaneId) -> Result<PaneId, TilingError> {
        let node = self.arena.get(target)?;
        if !node.is_leaf() {
            return Ok(self.focused);
        }
        if target != self.focused {
            return Err(TilingError::unsupported("split", target));
        }
        Ok(target)
    }

    /// Close a leaf. Its sibling takes over the parent split's place and
    /// geometry, the leaf's document is released, and focus moves into the
    /// sibling (staying put if it is already there).
    ///
    /// Closing the last leaf does not remove it; it is rebound to a fresh
    /// welcome document instead. Closing a split node closes the focused
    /// leaf. Returns the pane that now occupies the closed region.
    pub fn close(&mut self, target: PaneId) -> Result<PaneId, TilingError> {
        let target = if self.arena.get(target)?.is_leaf() {
            target
        } else {
            self.focused
        };
        let Some(parent) = self.arena.parent(target)? else {
            return self.reset_root_leaf(target);
        };

        let document = self.document_of(target)?;
        let (first, second) = self.arena.children(parent)?;
        let sibling = if first == target { second } else { first };
        let grandparent = self.arena.parent(parent)?;
        let parent_viewport = *self.arena.get(parent)?.viewport();

        match grandparent {
            Some(grandparent) => self.arena.replace_child(grandparent, parent, sibling)?,
            None => {
                self.root = sibling;
                self.arena.set_parent(sibling, None)?;
            }
        }
        self.arena.get_mut(sibling)?.viewport = parent_viewport;
        self.propagate(sibling)?;

        self.arena.remove(target);
        self.arena.remove(parent);
        if self.active_drag == Some(parent) {
            self.active_drag = None;
        }
        self.bindings.release(document);

        self.select(sibling)?;

        tracing::debug!(closed = %target, survivor = %sibling, "pane closed");
        self.emit(WorkspaceEvent::PaneClosed {
            closed: target,
            survivor: sibling,
        });
        Ok(sibling)
    }

    pub fn close_focused(&mut self) -> Result<PaneId, TilingError> {
        self.close(self.focused)
    }

    /// Rebind the only leaf to a fresh document, releasing the old one.
    fn reset_root_leaf(&mut self, leaf: PaneId) -> Result<PaneId, TilingError> {
        let bounds = self.bounds(leaf)?;
        let fresh = self.bindings.create();
        let mut content = match self.open_surface(fresh) {
            Ok(content) => content,
            Err(err) => {
                self.bindings.release(fresh);
                return Err(err);
            }
        };
        content.handle_resize(bounds.width, bounds.height);

        let released = self
            .arena
            .get_mut(leaf)?
            .as_leaf_mut()
            .ok_or(TilingError::unsupported("close", leaf))?
            .rebind(fresh, content);
        self.bindings.release(released);
        self.bindings.set_current(fresh);

        tracing::debug!(pane = %leaf, %released, bound = %fresh, "last pane reset");
        self.emit(WorkspaceEvent::DocumentRebound {
            pane: leaf,
            released,
            bound: fresh,
        });
        Ok(leaf)
    }
}
