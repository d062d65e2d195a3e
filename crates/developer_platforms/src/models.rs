//! # Models
//!
//! This module contains the data models used throughout Title Gate.
//!
//! These models represent the entities that the title validation works with.
//! They are designed to be serializable and deserializable to facilitate
//! integration with Git provider APIs.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// Represents a pull request from a Git provider.
///
/// This struct contains the essential information about a pull request
/// that is needed for title validation.
///
/// # Examples
///
/// ```
/// use title_gate_developer_platforms::models::PullRequest;
///
/// let pr = PullRequest {
///     number: 123,
///     title: "feat(auth): add GitHub login".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// The pull request number
    pub number: u64,

    /// The title of the pull request
    pub title: String,
}
