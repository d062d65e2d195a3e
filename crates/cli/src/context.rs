//! Access to the workflow event that triggered the run.
//!
//! GitHub Actions exposes the triggering event through two environment
//! variables: `GITHUB_EVENT_NAME` carries the event kind, and
//! `GITHUB_EVENT_PATH` points at a file holding the full event payload as
//! JSON. This module loads both and answers the questions the run needs:
//! which pull request to fetch, and which logins appear in the event.

use serde_json::Value;
use std::env;
use std::fs;
use std::path::Path;
use tracing::warn;

use title_gate_core::payload::collect_values;

use crate::errors::CliError;

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// Event kinds the validation accepts. Any other triggering event fails
/// the run before the provider is contacted.
pub const ACCEPTED_EVENTS: [&str; 2] = ["pull_request", "pull_request_target"];

/// Returns `true` when the given event kind is a pull request trigger.
pub fn is_pull_request_event(event_name: &str) -> bool {
    ACCEPTED_EVENTS.contains(&event_name)
}

/// The coordinates identifying the pull request to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestCoordinates {
    /// The owner of the base repository
    pub owner: String,

    /// The name of the base repository
    pub repository: String,

    /// The pull request number
    pub number: u64,
}

/// The triggering workflow event: its kind and its raw payload.
#[derive(Debug)]
pub struct EventContext {
    event_name: String,
    payload: Value,
}

impl EventContext {
    /// Creates a context from an already deserialized payload.
    pub fn new(event_name: &str, payload: Value) -> Self {
        Self {
            event_name: event_name.to_string(),
            payload,
        }
    }

    /// Loads the context from the standard workflow environment variables.
    pub fn from_env() -> Result<Self, CliError> {
        let event_name = env::var("GITHUB_EVENT_NAME").map_err(|_| {
            CliError::ConfigError("GITHUB_EVENT_NAME is not set in the environment".to_string())
        })?;
        let event_path = env::var("GITHUB_EVENT_PATH").map_err(|_| {
            CliError::ConfigError("GITHUB_EVENT_PATH is not set in the environment".to_string())
        })?;

        Self::from_file(&event_name, &event_path)
    }

    /// Loads the context from an event payload file.
    pub fn from_file<P: AsRef<Path>>(event_name: &str, path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CliError::ConfigError(format!(
                "Failed to read the event payload from {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let payload: Value = serde_json::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse the event payload: {}", e))
        })?;

        Ok(Self::new(event_name, payload))
    }

    /// The kind of the triggering event, e.g. `pull_request`.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    /// Every login appearing anywhere in the event payload.
    pub fn logins(&self) -> Vec<String> {
        collect_values(&self.payload, "login")
    }

    /// Extracts the owner, repository and number of the pull request the
    /// event refers to.
    ///
    /// The coordinates come from the base side of the pull request: the
    /// owner is the base repository's owner login and the repository is the
    /// base repository's name. A payload without these fields cannot be
    /// validated.
    pub fn pull_request_coordinates(&self) -> Result<PullRequestCoordinates, CliError> {
        let owner = self
            .payload
            .pointer("/pull_request/base/user/login")
            .and_then(Value::as_str)
            .ok_or_else(|| self.missing_field("pull_request.base.user.login"))?;

        let repository = self
            .payload
            .pointer("/pull_request/base/repo/name")
            .and_then(Value::as_str)
            .ok_or_else(|| self.missing_field("pull_request.base.repo.name"))?;

        let number = self
            .payload
            .pointer("/pull_request/number")
            .and_then(Value::as_u64)
            .ok_or_else(|| self.missing_field("pull_request.number"))?;

        Ok(PullRequestCoordinates {
            owner: owner.to_string(),
            repository: repository.to_string(),
            number,
        })
    }

    fn missing_field(&self, field: &str) -> CliError {
        warn!(
            event = self.event_name.as_str(),
            field = field,
            "Event payload is missing a required field"
        );
        CliError::ConfigError(format!(
            "The event payload does not contain the field '{}'",
            field
        ))
    }
}
