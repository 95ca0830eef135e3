//! Split geometry validation.

use crate::schema::LatticeConfig;

use super::helpers::check_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &LatticeConfig) {
    let layout = &config.layout;
    check_range(
        errors,
        "layout.separator_thickness",
        layout.separator_thickness,
        1,
        32,
    );
    check_range(
        errors,
        "layout.default_split_fraction",
        layout.default_split_fraction,
        0.1,
        0.9,
    );
    check_range(errors, "layout.focus_border_width", layout.focus_border_width, 0, 8);
}
