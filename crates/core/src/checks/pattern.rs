//! # Pattern Validation
//!
//! This module validates a pull request title against the configured
//! regular expression.

use regex::Regex;

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

/// Tests whether the title matches the configured pattern.
///
/// The pattern is a search, not an anchored full match: the title is valid
/// when the pattern matches anywhere in it. An empty pattern matches every
/// title, which is how the "no pattern configured" case behaves.
///
/// The pattern is user supplied, so it is compiled here rather than ahead
/// of time; a pattern that does not compile is a configuration error.
///
/// # Arguments
///
/// * `title` - The pull request title to validate
/// * `pattern` - The regular expression from the configuration
///
/// # Returns
///
/// A `Result` containing a boolean indicating whether the title matches,
/// or the compilation error for an invalid pattern.
///
/// # Examples
///
/// ```
/// use title_gate_core::checks::pattern::matches_pattern;
///
/// assert!(matches_pattern("feat: add login", "^(feat|fix):").unwrap());
/// assert!(!matches_pattern("add login", "^(feat|fix):").unwrap());
/// ```
pub fn matches_pattern(title: &str, pattern: &str) -> Result<bool, regex::Error> {
    let regex = Regex::new(pattern)?;
    Ok(regex.is_match(title))
}
