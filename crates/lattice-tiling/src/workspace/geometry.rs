//! Geometry propagation and layout queries.
//!
//! A split's viewport is the source of truth for its children: whenever a
//! split's bounds or fraction change, `propagate` rewrites every viewport
//! below it and tells leaf content its new size.

use lattice_common::{PaneId, Rect, TilingError};

use crate::binding::DocumentBinding;
use crate::layout::{borders, CursorZone, LayoutSnapshot, SeparatorBand};
use crate::tree::{Axis, Direction, PaneKind};
use crate::viewport::Viewport;

use super::Workspace;

impl<B: DocumentBinding> Workspace<B> {
    /// Push `id`'s geometry down its subtree.
    pub(super) fn propagate(&mut self, id: PaneId) -> Result<(), TilingError> {
        let node = self.arena.get(id)?;
        let viewport = *node.viewport();
        let children = match node.kind() {
            PaneKind::Leaf(_) => None,
            PaneKind::Split(split) => {
                let (first_rect, second_rect) = split.child_bounds(viewport.bounds());
                Some((
                    (split.first(), first_rect),
                    (split.second(), second_rect),
                    split.axis(),
                ))
            }
        };

        let Some((first, second, axis)) = children else {
            if let Some(leaf) = self.arena.get_mut(id)?.as_leaf_mut() {
                leaf.resize(viewport.width(), viewport.height());
            }
            return Ok(());
        };

        for (child, rect) in [first, second] {
            self.arena.get_mut(child)?.viewport = child_viewport(&viewport, rect, axis);
            self.propagate(child)?;
        }
        Ok(())
    }

    /// Resize the whole workspace. The root keeps its position.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), TilingError> {
        let root = self.root;
        let position = self.viewport(root)?.position();
        check_dimensions(position.x, position.y, width, height)?;
        self.arena.get_mut(root)?.viewport.set_size(width, height);
        self.propagate(root)?;
        tracing::debug!(width, height, "workspace resized");
        Ok(())
    }

    pub fn set_pane_position(&mut self, id: PaneId, x: i32, y: i32) -> Result<(), TilingError> {
        let viewport = self.viewport(id)?;
        check_dimensions(x, y, viewport.width(), viewport.height())?;
        self.arena.get_mut(id)?.viewport.set_position(x, y);
        self.propagate(id)
    }

    pub fn set_pane_size(&mut self, id: PaneId, width: i32, height: i32) -> Result<(), TilingError> {
        let position = self.viewport(id)?.position();
        check_dimensions(position.x, position.y, width, height)?;
        self.arena.get_mut(id)?.viewport.set_size(width, height);
        self.propagate(id)
    }

    pub fn set_pane_offset(&mut self, id: PaneId, dx: i32, dy: i32) -> Result<(), TilingError> {
        self.arena.get_mut(id)?.viewport.set_offset(dx, dy);
        self.propagate(id)
    }

    pub fn set_pane_reference(&mut self, id: PaneId, rx: i32, ry: i32) -> Result<(), TilingError> {
        self.arena.get_mut(id)?.viewport.set_reference(rx, ry);
        self.propagate(id)
    }

    pub fn set_pane_parent_extent(
        &mut self,
        id: PaneId,
        width: i32,
        height: i32,
    ) -> Result<(), TilingError> {
        let position = self.viewport(id)?.position();
        check_dimensions(position.x, position.y, width, height)?;
        self.arena.get_mut(id)?.viewport.set_parent_extent(width, height);
        self.propagate(id)
    }

    /// Bounds of every leaf, depth-first.
    pub fn compute_layout(&self) -> Vec<(PaneId, Rect)> {
        self.leaves()
            .into_iter()
            .filter_map(|id| self.bounds(id).ok().map(|rect| (id, rect)))
            .collect()
    }

    /// Separator hit zones, outermost first.
    pub fn separators(&self) -> Vec<SeparatorBand> {
        borders::compute_separators(&self.arena, self.root)
    }

    pub fn cursor_zone_at(&self, x: i32, y: i32) -> CursorZone {
        borders::cursor_zone_at(&self.separators(), x, y)
    }

    pub fn snapshot(&self) -> Result<LayoutSnapshot, TilingError> {
        LayoutSnapshot::capture(&self.arena, self.root, self.focused)
    }
}

fn check_dimensions(x: i32, y: i32, width: i32, height: i32) -> Result<(), TilingError> {
    if x < 0 || y < 0 || width < 0 || height < 0 {
        return Err(TilingError::Dimension {
            x,
            y,
            width,
            height,
        });
    }
    Ok(())
}

/// Viewport for a child occupying `rect` inside `parent`.
///
/// Offset is inherited unchanged. The reference point moves with the child's
/// position relative to the parent. The parent extent is scaled along the
/// split axis by the child's share and then grown to fit the child.
fn child_viewport(parent: &Viewport, rect: Rect, axis: Axis) -> Viewport {
    let mut viewport = *parent;
    viewport.set_position(rect.x, rect.y);

    let (extent_width, extent_height) = parent.parent_extent();
    let total = axis.extent(&parent.bounds());
    let share = axis.extent(&rect);
    let scale = |extent: i32| {
        if total > 0 {
            (extent as f64 * share as f64 / total as f64).round() as i32
        } else {
            extent
        }
    };
    let (scaled_width, scaled_height) = match axis.direction() {
        Direction::Vertical => (scale(extent_width), extent_height),
        Direction::Horizontal => (extent_width, scale(extent_height)),
    };
    viewport.set_parent_extent(scaled_width, scaled_height);
    viewport.set_size(rect.width, rect.height);

    let reference = parent.reference();
    viewport.set_reference(
        reference.x.saturating_add(rect.x - parent.x()),
        reference.y.saturating_add(rect.y - parent.y()),
    );
    viewport
}
