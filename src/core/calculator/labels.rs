//! Fallback labels for blank free-text fields.

pub const UNKNOWN_CONTRIBUTOR: &str = "Unknown";
pub const UNSPECIFIED_TYPE: &str = "Unspecified";
pub const UNTITLED_TASK: &str = "Untitled task";

/// Trimmed `raw`, or `fallback` when absent or blank.
pub fn normalize_or<'a>(raw: Option<&'a str>, fallback: &'a str) -> &'a str {
    raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(fallback)
}

pub fn contributor_label(who: Option<&str>) -> String {
    normalize_or(who, UNKNOWN_CONTRIBUTOR).to_string()
}

pub fn interrupt_type_label(kind: Option<&str>) -> String {
    normalize_or(kind, UNSPECIFIED_TYPE).to_string()
}
