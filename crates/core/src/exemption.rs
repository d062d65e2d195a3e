//! # Actor Exemption
//!
//! This module decides whether the validation rules should be skipped for a
//! run because an exempted actor is involved in the triggering event.
//!
//! Exempted actors (release bots, automation accounts, and the like) often
//! open pull requests with machine-generated titles that legitimately do not
//! follow the configured conventions. When one of them appears anywhere in
//! the event payload the whole rule set is skipped and the run passes.

#[cfg(test)]
#[path = "exemption_tests.rs"]
mod tests;

/// Returns `true` when the two slices share at least one common element.
///
/// Comparison is exact string equality. Both inputs are expected to be
/// small (a configured actor list and the logins found in one event
/// payload), so the quadratic scan is fine. Neither ordering nor uniqueness
/// is required of the inputs, and the check is symmetric in its arguments.
pub fn has_common_element(a: &[String], b: &[String]) -> bool {
    a.iter().any(|left| b.iter().any(|right| left == right))
}

/// Checks whether a run is exempt from title validation.
///
/// A run is exempt when the configured actor list is non-empty and at least
/// one configured actor appears among the logins collected from the event
/// payload. An empty configured list means no exemption is possible.
///
/// # Examples
///
/// ```
/// use title_gate_core::exemption::is_actor_exempt;
///
/// let allowed = vec!["release-bot".to_string()];
/// let logins = vec!["octocat".to_string(), "release-bot".to_string()];
///
/// assert!(is_actor_exempt(&allowed, &logins).is_some());
/// ```
pub fn is_actor_exempt(allowed_actors: &[String], event_logins: &[String]) -> Option<String> {
    if !has_common_element(allowed_actors, event_logins) {
        return None;
    }

    // A common element exists, so recover the first configured actor that
    // appears among the logins.
    allowed_actors
        .iter()
        .find(|actor| event_logins.contains(*actor))
        .cloned()
}
