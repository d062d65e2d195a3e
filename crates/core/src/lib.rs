//! # Title Gate Core
//!
//! Core business logic for validating pull request titles against a
//! configurable policy.
//!
//! Title Gate helps enforce consistent PR practices by checking that:
//! - PR titles match a configured regular expression
//! - PR titles stay within configured length bounds
//! - PR titles start with an allowed prefix and avoid disallowed prefixes
//!
//! Runs triggered by exempted actors (for example release automation) skip
//! all of the above and pass immediately.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use title_gate_developer_platforms::PullRequestProvider;
//! use title_gate_core::{TitleGate, ValidationOutcome, config::ValidationConfig};
//! use anyhow::Result;
//!
//! async fn validate_pr<P: PullRequestProvider + std::fmt::Debug>(provider: P) -> Result<()> {
//!     let config = ValidationConfig {
//!         title_pattern: "^(fix|feat):".to_string(),
//!         min_length: 5,
//!         ..ValidationConfig::default()
//!     };
//!
//!     let gate = TitleGate::with_config(provider, config);
//!
//!     let outcome = gate
//!         .process_pull_request("owner", "repo", 123, &[])
//!         .await?;
//!
//!     match outcome {
//!         ValidationOutcome::Fail { reason } => println!("Validation failed: {}", reason),
//!         _ => println!("PR title is valid!"),
//!     }
//!
//!     Ok(())
//! }
//! ```

use title_gate_developer_platforms::PullRequestProvider;
use tracing::{debug, error, info, instrument};

pub mod checks;
pub mod config;
use config::ValidationConfig;

pub mod errors;
use errors::TitleGateError;

pub mod exemption;
pub mod payload;

use checks::length::{meets_max_length, meets_min_length};
use checks::pattern::matches_pattern;
use checks::prefix::matches_any_prefix;
use exemption::is_actor_exempt;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Result of validating one pull request title.
///
/// A run produces exactly one outcome: either every applicable rule passed,
/// the run was exempted before any rule was evaluated, or exactly one rule
/// failed. Failures never accumulate; the first violated rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every applicable rule passed
    Pass,

    /// An exempted actor appears in the triggering event; all rules were
    /// skipped
    Exempt {
        /// The configured actor that matched a login in the event
        actor: String,
    },

    /// A rule was violated
    Fail {
        /// Human-readable description of the violated rule, embedding the
        /// offending title and the configured threshold, pattern or list
        reason: String,
    },
}

impl ValidationOutcome {
    /// Whether the run should be reported as successful.
    pub fn is_success(&self) -> bool {
        !matches!(self, ValidationOutcome::Fail { .. })
    }
}

/// Main struct for validating pull request titles.
///
/// `TitleGate` fetches the current pull request through the injected
/// provider and runs the configured rules against its title, in a fixed
/// order, short-circuiting on the first violation.
///
/// The title is always fetched fresh from the provider instead of being
/// read from the triggering event: when a user fixes the title and re-runs
/// the workflow, the event payload still carries the old title.
#[derive(Debug)]
pub struct TitleGate<P: PullRequestProvider + std::fmt::Debug> {
    provider: P,
    config: ValidationConfig,
}

impl<P: PullRequestProvider + std::fmt::Debug> TitleGate<P> {
    /// Creates a new `TitleGate` instance with default configuration.
    ///
    /// The default configuration has every rule disabled, so every title
    /// passes. Useful mostly for tests; real runs use [`with_config`].
    ///
    /// [`with_config`]: TitleGate::with_config
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new `TitleGate` instance with the given configuration.
    pub fn with_config(provider: P, config: ValidationConfig) -> Self {
        Self { provider, config }
    }

    /// Validates the title of a pull request against the configured rules.
    ///
    /// This method:
    /// 1. Fetches the pull request to obtain its current title
    /// 2. Passes the run immediately when an exempted actor appears among
    ///    `event_logins`
    /// 3. Applies the pattern, length and prefix rules in order, stopping
    ///    at the first violation
    ///
    /// # Arguments
    ///
    /// * `repo_owner` - The owner of the repository (e.g., "octocat")
    /// * `repo_name` - The name of the repository (e.g., "hello-world")
    /// * `pr_number` - The pull request number
    /// * `event_logins` - Every login found in the triggering event payload
    ///
    /// # Returns
    ///
    /// A `Result` containing the [`ValidationOutcome`] for the run. A rule
    /// violation is a `Fail` outcome, not an error; errors are reserved for
    /// provider failures and invalid configuration.
    #[instrument]
    pub async fn process_pull_request(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
        event_logins: &[String],
    ) -> Result<ValidationOutcome, TitleGateError> {
        info!(
            repository_owner = repo_owner,
            repository = repo_name,
            pull_request = pr_number,
            "Validating pull request title",
        );

        let pr = self
            .provider
            .get_pull_request(repo_owner, repo_name, pr_number)
            .await
            .map_err(|e| {
                error!(
                    repository_owner = repo_owner,
                    repository = repo_name,
                    pull_request = pr_number,
                    error = e.to_string(),
                    "Failed to find the PR"
                );

                TitleGateError::GitProviderError(format!(
                    "Failed to find the PR with number [{}] in {}/{}",
                    pr_number, repo_owner, repo_name
                ))
            })?;

        let title = &pr.title;
        info!(
            repository_owner = repo_owner,
            repository = repo_name,
            pull_request = pr_number,
            title = title.as_str(),
            "Got pull request",
        );

        if let Some(actor) = is_actor_exempt(&self.config.allowed_actors, event_logins) {
            info!(
                pull_request = pr_number,
                actor = actor.as_str(),
                "Skipping title check for exempted actor"
            );
            return Ok(ValidationOutcome::Exempt { actor });
        }

        if !matches_pattern(title, &self.config.title_pattern)? {
            return Ok(self.fail(
                pr_number,
                format!(
                    "Pull request title \"{}\" failed to match regex - {}",
                    title, self.config.title_pattern
                ),
            ));
        }

        if !meets_min_length(title, self.config.min_length) {
            return Ok(self.fail(
                pr_number,
                format!(
                    "Pull request title \"{}\" is smaller than the minimum length specified - {}",
                    title, self.config.min_length
                ),
            ));
        }

        if !meets_max_length(title, self.config.max_length) {
            return Ok(self.fail(
                pr_number,
                format!(
                    "Pull request title \"{}\" is greater than the maximum length specified - {}",
                    title, self.config.max_length
                ),
            ));
        }

        let case_sensitive = self.config.prefix_case_sensitive;
        if !self.config.allowed_prefixes.is_empty()
            && !matches_any_prefix(title, &self.config.allowed_prefixes, case_sensitive)
        {
            return Ok(self.fail(
                pr_number,
                format!(
                    "Pull request title \"{}\" did not match any of the allowed prefixes - {}",
                    title,
                    self.config.allowed_prefixes.join(",")
                ),
            ));
        }

        if !self.config.disallowed_prefixes.is_empty()
            && matches_any_prefix(title, &self.config.disallowed_prefixes, case_sensitive)
        {
            return Ok(self.fail(
                pr_number,
                format!(
                    "Pull request title \"{}\" matched with a disallowed prefix - {}",
                    title,
                    self.config.disallowed_prefixes.join(",")
                ),
            ));
        }

        debug!(pull_request = pr_number, "All title rules passed");
        Ok(ValidationOutcome::Pass)
    }

    fn fail(&self, pr_number: u64, reason: String) -> ValidationOutcome {
        info!(
            pull_request = pr_number,
            reason = reason.as_str(),
            "Title validation failed"
        );
        ValidationOutcome::Fail { reason }
    }
}
