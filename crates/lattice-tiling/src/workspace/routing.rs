//! Input routing and rendering over the pane tree.

use lattice_common::{KeyEvent, MouseEvent, MouseEventKind, PaneId, Rect};

use crate::binding::DocumentBinding;
use crate::content::{RenderSurface, ReturnMessage};
use crate::leaf::LeafPane;
use crate::tree::PaneKind;

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Route a pointer event through the tree.
    ///
    /// While a separator is being dragged every event goes to that split
    /// only. Otherwise a split first checks its own separator on press and
    /// then offers the event to both children; leaves take it when it lands
    /// inside them. Any press focuses the leaf under the pointer, including
    /// one that starts a separator drag.
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> ReturnMessage {
        if event.kind == MouseEventKind::Pressed {
            self.clear_stale_drag();
        }
        if let Some(split) = self.active_drag {
            return self.continue_drag(split, event);
        }
        self.route_mouse(self.root, event)
    }

    /// Deliver a key to the focused leaf.
    pub fn handle_key(&mut self, event: &KeyEvent) -> ReturnMessage {
        let focused = self.focused;
        match self.arena.get_mut(focused).ok().and_then(|n| n.as_leaf_mut()) {
            Some(leaf) => leaf.handle_key(event),
            None => ReturnMessage::Ignored,
        }
    }

    /// Draw the whole tree: each split draws its separator, then `first`,
    /// then `second`. The focused leaf gets a border.
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        self.render_node(self.root, surface);
    }

    fn render_node(&self, id: PaneId, surface: &mut dyn RenderSurface) {
        let Ok(node) = self.arena.get(id) else {
            return;
        };
        let bounds = node.viewport().bounds();
        match node.kind() {
            PaneKind::Split(split) => {
                split.render_separator(surface, &bounds);
                self.render_node(split.first(), surface);
                self.render_node(split.second(), surface);
            }
            PaneKind::Leaf(leaf) => {
                let border = (id == self.focused).then_some(self.options.focus_border_width);
                leaf.render(surface, bounds, border);
            }
        }
    }

    /// A press can never arrive mid-drag; any split still marked as
    /// dragging lost its release and goes back to idle.
    fn clear_stale_drag(&mut self) {
        for (id, node) in self.arena.iter_mut() {
            if let Some(split) = node.as_split_mut() {
                if split.end_drag() {
                    tracing::debug!(split = %id, "cleared stale separator drag");
                }
            }
        }
        self.active_drag = None;
    }

    fn continue_drag(&mut self, id: PaneId, event: &MouseEvent) -> ReturnMessage {
        let Ok(node) = self.arena.get_mut(id) else {
            self.active_drag = None;
            return ReturnMessage::Ignored;
        };
        let bounds = node.viewport().bounds();
        let Some(split) = node.as_split_mut() else {
            self.active_drag = None;
            return ReturnMessage::Ignored;
        };
        match event.kind {
            MouseEventKind::Dragged => {
                if !split.drag_to(&bounds, event.x, event.y) {
                    return ReturnMessage::Consumed;
                }
                let fraction = split.fraction();
                tracing::trace!(split = %id, fraction, "separator moved");
                match self.propagate(id) {
                    Ok(()) => ReturnMessage::Redraw,
                    Err(err) => {
                        tracing::warn!(split = %id, error = %err, "layout propagation failed");
                        ReturnMessage::Consumed
                    }
                }
            }
            MouseEventKind::Released => {
                split.end_drag();
                self.active_drag = None;
                tracing::debug!(split = %id, fraction = split.fraction(), "separator drag ended");
                ReturnMessage::Consumed
            }
            MouseEventKind::Pressed | MouseEventKind::Moved => ReturnMessage::Consumed,
        }
    }

    fn route_mouse(&mut self, id: PaneId, event: &MouseEvent) -> ReturnMessage {
        let Ok(node) = self.arena.get(id) else {
            return ReturnMessage::Ignored;
        };
        let bounds = node.viewport().bounds();
        let children = node.as_split().map(|s| (s.first(), s.second()));

        let Some((first, second)) = children else {
            return self.route_to_leaf(id, bounds, event);
        };

        if event.kind == MouseEventKind::Pressed {
            let started = self
                .arena
                .get_mut(id)
                .ok()
                .and_then(|n| n.as_split_mut())
                .is_some_and(|split| split.begin_drag(&bounds, event.x, event.y));
            if started {
                self.active_drag = Some(id);
                tracing::debug!(split = %id, x = event.x, y = event.y, "separator drag started");
                return self.focus_leaf_at(id, event.x, event.y);
            }
        }

        let reply = self.route_mouse(first, event);
        reply.merge(self.route_mouse(second, event))
    }

    /// The band overlaps both children, so a press on it still lands
    /// inside exactly one leaf. That leaf takes focus.
    fn focus_leaf_at(&mut self, split: PaneId, x: i32, y: i32) -> ReturnMessage {
        match self.leaf_at(split, x, y) {
            Some(leaf) if leaf != self.focused && self.set_focused(leaf).is_ok() => {
                ReturnMessage::Redraw
            }
            _ => ReturnMessage::Consumed,
        }
    }

    fn leaf_at(&self, id: PaneId, x: i32, y: i32) -> Option<PaneId> {
        let node = self.arena.get(id).ok()?;
        if !node.viewport().bounds().contains(x, y) {
            return None;
        }
        match node.kind() {
            PaneKind::Leaf(_) => Some(id),
            PaneKind::Split(split) => self
                .leaf_at(split.first(), x, y)
                .or_else(|| self.leaf_at(split.second(), x, y)),
        }
    }

    fn route_to_leaf(&mut self, id: PaneId, bounds: Rect, event: &MouseEvent) -> ReturnMessage {
        let focused = id == self.focused;
        if !LeafPane::accepts(event, bounds, focused) {
            return ReturnMessage::Ignored;
        }

        let mut reply = ReturnMessage::Ignored;
        if event.kind == MouseEventKind::Pressed && !focused && self.set_focused(id).is_ok() {
            reply = ReturnMessage::Redraw;
        }
        let content = match self.arena.get_mut(id).ok().and_then(|n| n.as_leaf_mut()) {
            Some(leaf) => leaf.handle_mouse(event, bounds),
            None => ReturnMessage::Ignored,
        };
        reply.merge(content)
    }
}
