use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{error, instrument};

use crate::{errors::Error, models::PullRequest, PullRequestProvider};

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// This is the authentication path used when the validation runs inside a
/// workflow: the workflow supplies a token and all API calls are made on its
/// behalf.
///
/// # Arguments
///
/// * `token` - The personal access token to authenticate with.
///
/// # Returns
///
/// A `Result` containing an authenticated `Octocrab` client, or an `Error`
/// if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|_| Error::AuthError("Failed to create a client for the provided token".to_string()))
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = *source;
            error!(
                error_message = err.message,
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}

/// A [`PullRequestProvider`] backed by the GitHub REST API.
///
/// The event payload that triggered the run may carry a stale pull request
/// title, so this provider always fetches the pull request fresh from the
/// API rather than trusting cached event data.
#[derive(Debug, Default)]
pub struct GitHubProvider {
    client: Octocrab,
}

impl GitHubProvider {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Creates a provider authenticated with a personal access token.
    pub fn from_token(token: &str) -> Result<Self, Error> {
        Ok(Self::new(create_token_client(token)?))
    }
}

#[async_trait]
impl PullRequestProvider for GitHubProvider {
    #[instrument]
    async fn get_pull_request(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
    ) -> Result<PullRequest, Error> {
        match self
            .client
            .pulls(repo_owner, repo_name)
            .get(pr_number)
            .await
        {
            Ok(pr) => Ok(PullRequest {
                number: pr.number,
                title: pr.title.unwrap_or_default(),
            }),
            Err(e) => {
                log_octocrab_error("Failed to get pull request information", e);
                Err(Error::InvalidResponse)
            }
        }
    }
}
