//! Checks shared by the section validators. Each one records a message
//! and returns, so a single pass reports every problem in the file.

use std::fmt::Display;

/// `value` must lie in `[min, max]`. Written as a membership test so a NaN
/// fraction is rejected too.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, key: &str, value: T, min: T, max: T)
where
    T: PartialOrd + Display + Copy,
{
    if !(min <= value && value <= max) {
        errors.push(format!("{key} = {value} must be between {min} and {max}"));
    }
}

/// `value` must be at least `floor`. `reason` finishes the sentence
/// "... is too small to ...".
pub(crate) fn check_at_least(
    errors: &mut Vec<String>,
    key: &str,
    value: u32,
    floor: u32,
    reason: &str,
) {
    if value < floor {
        errors.push(format!("{key} = {value} is too small to {reason} (needs {floor})"));
    }
}
