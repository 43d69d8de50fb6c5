//! Input validation functions
//!
//! Request bodies deserialize required fields as `Option<String>` so a
//! missing field never fails at the framework layer. These helpers decide
//! whether such a field actually carries a usable value.

/// Returns the trimmed value when it is present and non-blank.
///
/// Absent fields, empty strings, and whitespace-only strings all count
/// as missing.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the trimmed value from an optional owned field.
pub fn non_blank_owned(value: &Option<String>) -> Option<&str> {
    non_blank(value.as_deref())
}
