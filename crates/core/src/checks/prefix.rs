//! # Prefix Validation
//!
//! This module provides the prefix matching used by the allowed-prefix and
//! disallowed-prefix stages of the pipeline.

#[cfg(test)]
#[path = "prefix_tests.rs"]
mod tests;

/// Tests whether a title starts with the given prefix.
///
/// When `case_sensitive` is `false` both the title and the prefix are
/// lowercased with a locale-independent fold before comparing. An empty
/// prefix matches every title; callers that do not want that behavior must
/// filter empty entries out of their configuration before calling.
///
/// # Examples
///
/// ```
/// use title_gate_core::checks::prefix::matches_prefix;
///
/// assert!(matches_prefix("feat: add login", "feat:", true));
/// assert!(matches_prefix("WIP: draft", "wip:", false));
/// assert!(!matches_prefix("WIP: draft", "wip:", true));
/// ```
pub fn matches_prefix(title: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        title.starts_with(prefix)
    } else {
        title.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}

/// Returns `true` when at least one of the given prefixes matches the title.
pub fn matches_any_prefix(title: &str, prefixes: &[String], case_sensitive: bool) -> bool {
    prefixes
        .iter()
        .any(|prefix| matches_prefix(title, prefix, case_sensitive))
}
