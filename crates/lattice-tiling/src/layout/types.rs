//! Tiling options shared by every split node.

/// Geometry settings applied when splits are created and drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingOptions {
    /// Thickness of the separator hit zone, and the smallest extent a
    /// child may be dragged down to.
    pub separator_thickness: i32,
    /// Fraction given to the `first` child of a new split.
    pub default_fraction: f64,
    /// Width of the border drawn around the focused leaf; 0 disables it.
    pub focus_border_width: i32,
}

impl Default for TilingOptions {
    fn default() -> Self {
        Self {
            separator_thickness: 4,
            default_fraction: 0.5,
            focus_border_width: 1,
        }
    }
}
