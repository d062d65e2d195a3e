use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Invalid arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

impl CliError {
    /// The process exit code this error maps to.
    ///
    /// A rule violation exits 1 (the conventional "check failed" code);
    /// the other variants get distinct codes so a workflow can tell a
    /// misconfigured run apart from a genuinely failed check.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::ConfigError(_) => 2,
            CliError::AuthError(_) => 3,
            CliError::NetworkError(_) => 4,
            CliError::InvalidArguments(_) => 5,
            CliError::ValidationFailed(_) => 1,
            CliError::Other(_) => 1,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(err.to_string())
    }
}

impl std::process::Termination for CliError {
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(self.exit_code())
    }
}
