use thiserror::Error;

#[derive(Error, Debug)]
pub enum TitleGateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Git provider error: {0}")]
    GitProviderError(String),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}
