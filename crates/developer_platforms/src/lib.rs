use async_trait::async_trait;

pub mod errors;

pub mod github;

pub mod models;
use errors::Error;
use models::PullRequest;

/// Trait for interacting with developer platforms that provide pull requests
/// (e.g., GitHub, GitLab).
///
/// The title validation pipeline only needs to read the current state of a
/// pull request, so this trait is deliberately narrow: implementations fetch
/// a pull request by its coordinates and nothing else. Keeping the surface
/// small makes the pipeline straightforward to unit test with an in-memory
/// implementation.
///
/// # Example Implementation
///
/// ```rust,no_run
/// use title_gate_developer_platforms::{PullRequestProvider, errors::Error, models::PullRequest};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// struct GitHubProvider {
///     // Fields for authentication, etc.
///     token: String,
/// }
///
/// #[async_trait]
/// impl PullRequestProvider for GitHubProvider {
///     async fn get_pull_request(
///         &self,
///         repo_owner: &str,
///         repo_name: &str,
///         pr_number: u64,
///     ) -> Result<PullRequest, Error> {
///         // Implementation to fetch PR from GitHub API
///         // ...
///         # unimplemented!()
///     }
/// }
/// ```
#[async_trait]
pub trait PullRequestProvider {
    /// Retrieves a pull request from the Git provider.
    ///
    /// # Arguments
    ///
    /// * `repo_owner` - The owner of the repository
    /// * `repo_name` - The name of the repository
    /// * `pr_number` - The pull request number
    ///
    /// # Returns
    ///
    /// A `Result` containing the pull request information
    async fn get_pull_request(
        &self,
        repo_owner: &str,
        repo_name: &str,
        pr_number: u64,
    ) -> Result<PullRequest, Error>;
}
