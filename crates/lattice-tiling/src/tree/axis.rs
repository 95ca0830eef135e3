//! Axis selection for split nodes.
//!
//! Both split orientations share one implementation; the only differences
//! are which extent is divided and on which side the `first` child sits.

use lattice_common::Rect;

use super::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    direction: Direction,
}

impl Axis {
    pub fn of(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Extent along the split axis.
    pub fn extent(&self, rect: &Rect) -> i32 {
        match self.direction {
            Direction::Vertical => rect.width,
            Direction::Horizontal => rect.height,
        }
    }

    /// Origin along the split axis.
    pub fn origin(&self, rect: &Rect) -> i32 {
        match self.direction {
            Direction::Vertical => rect.x,
            Direction::Horizontal => rect.y,
        }
    }

    /// Pointer coordinate along the split axis.
    pub fn coordinate(&self, x: i32, y: i32) -> i32 {
        match self.direction {
            Direction::Vertical => x,
            Direction::Horizontal => y,
        }
    }

    /// Whether `first` is placed at the origin side of the axis.
    /// Vertical splits put `first` on the left; horizontal splits put it
    /// at the bottom.
    pub fn first_at_origin(&self) -> bool {
        matches!(self.direction, Direction::Vertical)
    }

    /// Sign applied to a pointer delta to get the growth of `first`.
    pub fn first_growth_sign(&self) -> i32 {
        if self.first_at_origin() {
            1
        } else {
            -1
        }
    }

    /// Replace the split-axis span of `rect`.
    pub fn with_span(&self, rect: Rect, origin: i32, extent: i32) -> Rect {
        match self.direction {
            Direction::Vertical => Rect::new(origin, rect.y, extent, rect.height),
            Direction::Horizontal => Rect::new(rect.x, origin, rect.width, extent),
        }
    }

    /// Divide `rect` giving `first_len` to the first child. Returns
    /// `(first, second)`; together they tile `rect` exactly.
    pub fn divide(&self, rect: Rect, first_len: i32) -> (Rect, Rect) {
        let total = self.extent(&rect);
        let first_len = first_len.clamp(0, total);
        let second_len = total - first_len;
        let origin = self.origin(&rect);
        if self.first_at_origin() {
            (
                self.with_span(rect, origin, first_len),
                self.with_span(rect, origin.saturating_add(first_len), second_len),
            )
        } else {
            (
                self.with_span(rect, origin.saturating_add(second_len), first_len),
                self.with_span(rect, origin, second_len),
            )
        }
    }

    /// Coordinate of the boundary between the two children.
    pub fn boundary(&self, rect: &Rect, first_len: i32) -> i32 {
        let total = self.extent(rect);
        if self.first_at_origin() {
            self.origin(rect).saturating_add(first_len)
        } else {
            self.origin(rect).saturating_add(total - first_len)
        }
    }

    /// Band of `thickness` centred on the boundary, spanning the cross axis.
    pub fn band(&self, rect: &Rect, first_len: i32, thickness: i32) -> Rect {
        let start = self.boundary(rect, first_len).saturating_sub(thickness / 2);
        self.with_span(*rect, start, thickness)
    }
}
