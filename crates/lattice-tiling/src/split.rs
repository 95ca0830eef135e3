//! Internal node of the pane tree: two children and a draggable separator.
//!
//! Both orientations share this type; [`Axis`] supplies the extent,
//! position and child ordering for the split direction.
//!
//! Separator state machine, identical for both orientations:
//!
//! ```text
//! idle --press in band--> dragging --drag--> dragging
//!   ^                        |
//!   +------release-----------+
//! ```
//!
//! A drag that would shrink either child below the separator thickness is
//! ignored. A stale drag (release lost) is cleared by the next press.

use lattice_common::{Color, PaneId, Rect};

use crate::content::RenderSurface;
use crate::tree::{Axis, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragState {
    /// Pointer coordinate on the split axis at press time.
    anchor: i32,
    /// Extent of `first` at press time.
    start_first: i32,
}

#[derive(Debug, Clone)]
pub struct SplitPane {
    direction: Direction,
    first: PaneId,
    second: PaneId,
    fraction: f64,
    thickness: i32,
    drag: Option<DragState>,
}

impl SplitPane {
    pub fn new(direction: Direction, first: PaneId, second: PaneId, fraction: f64, thickness: i32) -> Self {
        Self {
            direction,
            first,
            second,
            fraction: fraction.clamp(0.0, 1.0),
            thickness: thickness.max(1),
            drag: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn axis(&self) -> Axis {
        Axis::of(self.direction)
    }

    pub fn first(&self) -> PaneId {
        self.first
    }

    pub fn second(&self) -> PaneId {
        self.second
    }

    /// Share of the split axis allotted to `first`.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn separator_thickness(&self) -> i32 {
        self.thickness
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn replace_child(&mut self, old: PaneId, new: PaneId) -> bool {
        if self.first == old {
            self.first = new;
            true
        } else if self.second == old {
            self.second = new;
            true
        } else {
            false
        }
    }

    /// Extent of `first` inside `bounds`.
    pub fn first_len(&self, bounds: &Rect) -> i32 {
        let total = self.axis().extent(bounds);
        ((total as f64) * self.fraction).round() as i32
    }

    /// `(first, second)` rectangles; they tile `bounds` exactly.
    pub fn child_bounds(&self, bounds: Rect) -> (Rect, Rect) {
        self.axis().divide(bounds, self.first_len(&bounds))
    }

    /// Hit zone of the separator.
    pub fn separator_band(&self, bounds: &Rect) -> Rect {
        self.axis().band(bounds, self.first_len(bounds), self.thickness)
    }

    /// Enter `dragging` if the press lands on the separator.
    pub fn begin_drag(&mut self, bounds: &Rect, x: i32, y: i32) -> bool {
        if !self.separator_band(bounds).contains(x, y) {
            return false;
        }
        self.drag = Some(DragState {
            anchor: self.axis().coordinate(x, y),
            start_first: self.first_len(bounds),
        });
        true
    }

    /// Move the separator to follow the pointer. Returns whether the
    /// fraction changed; out-of-range moves leave it untouched.
    pub fn drag_to(&mut self, bounds: &Rect, x: i32, y: i32) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let axis = self.axis();
        let total = i64::from(axis.extent(bounds));
        let thickness = i64::from(self.thickness);
        // pointer coordinates are unbounded; widen before taking deltas
        let delta = i64::from(axis.coordinate(x, y)) - i64::from(drag.anchor);
        let first = i64::from(drag.start_first) + delta * i64::from(axis.first_growth_sign());
        if total <= 0 || first < thickness || total - first < thickness {
            return false;
        }
        let fraction = first as f64 / total as f64;
        if fraction == self.fraction {
            return false;
        }
        self.fraction = fraction;
        true
    }

    /// Leave `dragging`. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    pub fn render_separator(&self, surface: &mut dyn RenderSurface, bounds: &Rect) {
        surface.fill_rect(self.separator_band(bounds), Color::SEPARATOR);
    }
}
