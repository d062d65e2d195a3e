use clap::Args;
use tracing::{debug, info, instrument};

use title_gate_core::config::{split_list, ValidationConfig};
use title_gate_core::errors::TitleGateError;
use title_gate_core::{TitleGate, ValidationOutcome};
use title_gate_developer_platforms::github::GitHubProvider;

use crate::context::{is_pull_request_event, EventContext};
use crate::errors::CliError;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Arguments for a validation run.
///
/// Each argument doubles as a workflow input: GitHub Actions exposes the
/// inputs declared in the action manifest as `INPUT_*` environment
/// variables, which clap picks up when the flag is not given explicitly.
#[derive(Args, Debug)]
pub struct GateArgs {
    /// Token used to fetch the pull request from the GitHub API
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Comma-separated logins that exempt a run from all title rules
    #[arg(long, env = "INPUT_ALLOWED_ACTORS", default_value = "")]
    pub allowed_actors: String,

    /// Regular expression the title must match
    #[arg(long, env = "INPUT_REGEX", default_value = "")]
    pub regex: String,

    /// Minimum title length in characters
    #[arg(long, env = "INPUT_MIN_LENGTH", default_value = "")]
    pub min_length: String,

    /// Maximum title length in characters; 0 disables the bound
    #[arg(long, env = "INPUT_MAX_LENGTH", default_value = "")]
    pub max_length: String,

    /// Comma-separated prefixes the title must start with
    #[arg(long, env = "INPUT_ALLOWED_PREFIXES", default_value = "")]
    pub allowed_prefixes: String,

    /// Comma-separated prefixes the title must not start with
    #[arg(long, env = "INPUT_DISALLOWED_PREFIXES", default_value = "")]
    pub disallowed_prefixes: String,

    /// Whether prefix comparison is case sensitive ("true" enables it)
    #[arg(long, env = "INPUT_PREFIX_CASE_SENSITIVE", default_value = "")]
    pub prefix_case_sensitive: String,
}

/// Parses a length input, treating an unset input as zero.
///
/// Workflow inputs are always strings and arrive empty when not
/// configured; zero disables the corresponding rule. A non-empty value
/// that is not a number is a genuine misconfiguration and is rejected.
fn parse_length(name: &str, raw: &str) -> Result<usize, CliError> {
    if raw.is_empty() {
        return Ok(0);
    }

    raw.parse::<usize>().map_err(|_| {
        CliError::InvalidArguments(format!(
            "Expected a non-negative number for {}, got '{}'",
            name, raw
        ))
    })
}

/// Builds the validation configuration from the run arguments.
fn build_validation_config(args: &GateArgs) -> Result<ValidationConfig, CliError> {
    Ok(ValidationConfig {
        allowed_actors: split_list(&args.allowed_actors),
        title_pattern: args.regex.clone(),
        min_length: parse_length("min_length", &args.min_length)?,
        max_length: parse_length("max_length", &args.max_length)?,
        allowed_prefixes: split_list(&args.allowed_prefixes),
        disallowed_prefixes: split_list(&args.disallowed_prefixes),
        prefix_case_sensitive: args.prefix_case_sensitive == "true",
    })
}

/// Executes one validation run against the triggering event.
///
/// The flow mirrors the stages of the validation pipeline:
/// 1. Reject events that are not pull request triggers.
/// 2. Extract the pull request coordinates and logins from the payload.
/// 3. Fetch the pull request and run the title rules.
/// 4. Map the outcome to the process result: a rule violation becomes a
///    [`CliError::ValidationFailed`] and therefore a failed run.
///
/// # Errors
///
/// Returns a `CliError` when the event is not a pull request trigger, the
/// event payload is unusable, the configuration is invalid, the GitHub
/// fetch fails, or a rule is violated.
#[instrument(skip(args))]
pub async fn execute(args: GateArgs) -> Result<(), CliError> {
    let context = EventContext::from_env()?;
    info!(event = context.event_name(), "Received workflow event");

    if !is_pull_request_event(context.event_name()) {
        return Err(CliError::ValidationFailed(format!(
            "Invalid event: {}",
            context.event_name()
        )));
    }

    let coordinates = context.pull_request_coordinates()?;
    let logins = context.logins();
    debug!(
        repository_owner = coordinates.owner.as_str(),
        repository = coordinates.repository.as_str(),
        pull_request = coordinates.number,
        logins = ?logins,
        "Extracted pull request coordinates from the event payload"
    );

    let config = build_validation_config(&args)?;
    info!(
        allowed_actors = args.allowed_actors.as_str(),
        allowed_prefixes = args.allowed_prefixes.as_str(),
        disallowed_prefixes = args.disallowed_prefixes.as_str(),
        "Loaded validation configuration"
    );

    let provider = GitHubProvider::from_token(&args.github_token)
        .map_err(|e| CliError::AuthError(e.to_string()))?;

    let gate = TitleGate::with_config(provider, config);
    let outcome = gate
        .process_pull_request(
            &coordinates.owner,
            &coordinates.repository,
            coordinates.number,
            &logins,
        )
        .await
        .map_err(|e| match e {
            TitleGateError::GitProviderError(message) => CliError::NetworkError(message),
            TitleGateError::RegexError(source) => CliError::InvalidArguments(source.to_string()),
            TitleGateError::ConfigError(message) => CliError::ConfigError(message),
        })?;

    match outcome {
        ValidationOutcome::Pass => {
            info!(
                pull_request = coordinates.number,
                "Pull request title passed validation"
            );
            Ok(())
        }
        ValidationOutcome::Exempt { actor } => {
            info!(
                pull_request = coordinates.number,
                actor = actor.as_str(),
                "Skipped title validation for exempted actor"
            );
            Ok(())
        }
        ValidationOutcome::Fail { reason } => Err(CliError::ValidationFailed(reason)),
    }
}
