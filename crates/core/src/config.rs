//! Configuration settings for the Title Gate core functionality.
//!
//! The configuration bundle is constructed once per run from the named
//! inputs supplied by the invoking workflow and is immutable afterwards.
//! Every rule defaults to "disabled" when its field is empty or zero, so
//! an unconfigured run passes every title.

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for pull request title validation.
///
/// Field semantics mirror the action inputs:
/// - an empty `allowed_actors` list means no run can be exempted,
/// - an empty `title_pattern` matches every title,
/// - a `max_length` of zero means the upper bound is disabled,
/// - empty prefix lists disable the corresponding prefix stages.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Actors whose involvement in the triggering event exempts the run
    /// from all title rules
    pub allowed_actors: Vec<String>,

    /// Regular expression the title must match
    pub title_pattern: String,

    /// Minimum title length in characters
    pub min_length: usize,

    /// Maximum title length in characters; zero disables the bound
    pub max_length: usize,

    /// Prefixes the title must start with (at least one)
    pub allowed_prefixes: Vec<String>,

    /// Prefixes the title must not start with
    pub disallowed_prefixes: Vec<String>,

    /// Whether prefix comparison is case sensitive
    pub prefix_case_sensitive: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            allowed_actors: Vec::new(),
            title_pattern: String::new(),
            min_length: 0,
            max_length: 0,
            allowed_prefixes: Vec::new(),
            disallowed_prefixes: Vec::new(),
            prefix_case_sensitive: false,
        }
    }
}

/// Splits a comma-separated input value into its entries.
///
/// Empty segments are dropped so that an unset input produces an empty
/// list rather than a list containing one empty string. An empty string in
/// an actor list would never match a login, but an empty string in a prefix
/// list would match every title.
///
/// # Examples
///
/// ```
/// use title_gate_core::config::split_list;
///
/// assert_eq!(split_list("fix:,feat:"), vec!["fix:", "feat:"]);
/// assert!(split_list("").is_empty());
/// ```
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_string())
        .collect()
}
