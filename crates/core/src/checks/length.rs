//! # Length Validation
//!
//! This module validates a pull request title against the configured
//! length bounds.

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;

/// Returns the length of a title as counted by the length rules.
///
/// Lengths are counted in characters rather than bytes so that titles with
/// non-ASCII content are measured the way a reader would measure them.
pub fn title_length(title: &str) -> usize {
    title.chars().count()
}

/// Tests whether the title satisfies the minimum length bound.
pub fn meets_min_length(title: &str, min_length: usize) -> bool {
    title_length(title) >= min_length
}

/// Tests whether the title satisfies the maximum length bound.
///
/// A `max_length` of zero means the bound is disabled and every title
/// passes.
pub fn meets_max_length(title: &str, max_length: usize) -> bool {
    max_length == 0 || title_length(title) <= max_length
}
