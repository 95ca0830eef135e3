//! Pane geometry: absolute position, size, and the three auxiliary
//! coordinates scrollable content uses to clip and translate itself.
//!
//! * `offset`: scroll translation applied to content.
//! * `reference`: origin of the scroll clip used by visibility tests.
//! * `parent_extent`: bounding box the content must not exceed. It grows
//!   with the size but never shrinks on its own.

use lattice_common::{Point, Rect, TilingError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    offset: Point,
    reference: Point,
    extent_width: i32,
    extent_height: i32,
}

impl Viewport {
    /// Build a viewport, rejecting negative position or size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, TilingError> {
        if x < 0 || y < 0 || width < 0 || height < 0 {
            return Err(TilingError::Dimension {
                x,
                y,
                width,
                height,
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
            offset: Point::default(),
            reference: Point::new(x, y),
            extent_width: width,
            extent_height: height,
        })
    }

    pub fn from_rect(rect: Rect) -> Result<Self, TilingError> {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn reference(&self) -> Point {
        self.reference
    }

    pub fn parent_extent(&self) -> (i32, i32) {
        (self.extent_width, self.extent_height)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(x, y)
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Set the size; the parent extent is enlarged to fit, never reduced.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        self.grow_parent_extent(width, height);
    }

    pub fn set_bounds(&mut self, rect: Rect) {
        self.set_position(rect.x, rect.y);
        self.set_size(rect.width, rect.height);
    }

    /// Set the parent extent outright. Used when a pane inherits the
    /// geometry of the node it replaces.
    pub fn set_parent_extent(&mut self, width: i32, height: i32) {
        self.extent_width = width;
        self.extent_height = height;
    }

    /// Raise the parent extent to at least the given size.
    pub fn grow_parent_extent(&mut self, width: i32, height: i32) {
        self.extent_width = self.extent_width.max(width);
        self.extent_height = self.extent_height.max(height);
    }

    pub fn set_offset(&mut self, dx: i32, dy: i32) {
        self.offset = Point::new(dx, dy);
    }

    pub fn set_reference(&mut self, rx: i32, ry: i32) {
        self.reference = Point::new(rx, ry);
    }

    /// True when the translated span `[x + dx, x + dx + width)` lies entirely
    /// outside `[reference.x, reference.x + extent_width)`.
    pub fn is_out_of_horizontal_bounds(&self) -> bool {
        let left = self.x + self.offset.x;
        let right = left + self.width;
        right <= self.reference.x || left >= self.reference.x + self.extent_width
    }

    /// Vertical counterpart of [`Viewport::is_out_of_horizontal_bounds`].
    pub fn is_out_of_vertical_bounds(&self) -> bool {
        let top = self.y + self.offset.y;
        let bottom = top + self.height;
        bottom <= self.reference.y || top >= self.reference.y + self.extent_height
    }

    pub fn is_visible(&self) -> bool {
        !self.is_out_of_horizontal_bounds() && !self.is_out_of_vertical_bounds()
    }
}
