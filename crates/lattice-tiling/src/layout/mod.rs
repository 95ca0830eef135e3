pub mod borders;
mod snapshot;
mod types;

pub use borders::{CursorZone, SeparatorBand};
pub use snapshot::{LayoutSnapshot, SnapshotNode};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = TilingOptions::default();
        assert_eq!(opts.separator_thickness, 4);
        assert!((opts.default_fraction - 0.5).abs() < f64::EPSILON);
        assert_eq!(opts.focus_border_width, 1);
    }
}
