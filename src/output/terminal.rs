//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::TagSet;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format a tag set as a semicolon-separated `key=value` string.
///
/// BTreeMap iteration keeps the order stable across runs.
pub fn format_tags(tags: &TagSet) -> String {
    if tags.is_empty() {
        return "None".to_string();
    }
    tags.iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<String>>()
        .join(";")
}
