#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Error types for developer platform operations.
///
/// This enum represents all possible errors that can occur when interacting
/// with developer platforms like GitHub, GitLab, etc. Each variant provides
/// specific context about the type of failure encountered.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic API request failure.
    ///
    /// This error indicates that an API call to the developer platform failed
    /// for an unspecified reason. This is typically used as a fallback when
    /// more specific error information is not available.
    #[error("API request failed")]
    ApiError(),

    /// Authentication failed with the platform.
    ///
    /// This error indicates that the provided credentials are invalid,
    /// expired, or insufficient for the requested operation. The string
    /// parameter contains additional details about the authentication failure.
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Invalid response format from platform API.
    ///
    /// This error indicates that the response received from the developer
    /// platform API was not in the expected format. This could happen due to
    /// API version changes, malformed responses, or missing required fields.
    #[error("Invalid response format")]
    InvalidResponse,
}
