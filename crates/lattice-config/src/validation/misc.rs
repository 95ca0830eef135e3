//! Window and document validation.

use crate::schema::LatticeConfig;

use super::helpers::{check_at_least, check_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &LatticeConfig) {
    let window = &config.window;
    check_range(errors, "window.width", window.width, 16, 10_000);
    check_range(errors, "window.height", window.height, 16, 10_000);

    // the first split needs room for two children at least one separator wide
    let floor = config.layout.separator_thickness.saturating_mul(2);
    check_at_least(errors, "window.width", window.width, floor, "split");
    check_at_least(errors, "window.height", window.height, floor, "split");
}

pub(crate) fn validate_document(errors: &mut Vec<String>, config: &LatticeConfig) {
    if config.document.welcome_url.trim().is_empty() {
        errors.push("document.welcome_url must not be empty".into());
    }
}
