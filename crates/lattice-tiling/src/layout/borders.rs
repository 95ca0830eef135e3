//! Separator enumeration for hover feedback and drawing.
//!
//! Walks the split tree and produces one [`SeparatorBand`] per split node
//! describing where its hit zone sits. The shell uses these to pick a
//! resize cursor while the pointer hovers a separator.

use serde::{Deserialize, Serialize};

use lattice_common::{PaneId, Rect};

use crate::tree::{Direction, PaneArena, PaneKind};

// =============================================================================
// TYPES
// =============================================================================

/// Hit zone of one split's separator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparatorBand {
    pub split: PaneId,
    pub direction: Direction,
    pub band: Rect,
    pub dragging: bool,
}

/// Pointer feedback for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorZone {
    /// Not over any separator.
    None,
    /// Over a vertical separator (left/right resize).
    ColResize,
    /// Over a horizontal separator (up/down resize).
    RowResize,
}

impl SeparatorBand {
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.band.contains(x, y)
    }

    pub fn cursor_zone(&self) -> CursorZone {
        match self.direction {
            Direction::Vertical => CursorZone::ColResize,
            Direction::Horizontal => CursorZone::RowResize,
        }
    }
}

// =============================================================================
// COMPUTATION
// =============================================================================

/// All separators under `root`, outermost first.
pub fn compute_separators(arena: &PaneArena, root: PaneId) -> Vec<SeparatorBand> {
    let mut out = Vec::new();
    walk(arena, root, &mut out);
    out
}

fn walk(arena: &PaneArena, id: PaneId, out: &mut Vec<SeparatorBand>) {
    let Ok(node) = arena.get(id) else {
        return;
    };
    if let PaneKind::Split(split) = node.kind() {
        out.push(SeparatorBand {
            split: id,
            direction: split.direction(),
            band: split.separator_band(&node.viewport().bounds()),
            dragging: split.is_dragging(),
        });
        walk(arena, split.first(), out);
        walk(arena, split.second(), out);
    }
}

/// Cursor feedback at `(x, y)`. Inner separators win over outer ones.
pub fn cursor_zone_at(separators: &[SeparatorBand], x: i32, y: i32) -> CursorZone {
    separators
        .iter()
        .rev()
        .find(|s| s.hit_test(x, y))
        .map_or(CursorZone::None, SeparatorBand::cursor_zone)
}

// =============================================================================
// TESTS
// =============================================================================
