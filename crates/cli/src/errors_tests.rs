use crate::errors::CliError;

#[test]
fn test_validation_failed_display() {
    let error = CliError::ValidationFailed("title too short".to_string());
    assert_eq!(error.to_string(), "Validation failed: title too short");
}

#[test]
fn test_config_error_display() {
    let error = CliError::ConfigError("missing event path".to_string());
    assert_eq!(error.to_string(), "Configuration error: missing event path");
}

#[test]
fn test_invalid_arguments_display() {
    let error = CliError::InvalidArguments("min_length is not a number".to_string());
    assert_eq!(
        error.to_string(),
        "Invalid arguments: min_length is not a number"
    );
}

#[test]
fn test_exit_codes_distinguish_failure_kinds() {
    assert_eq!(CliError::ValidationFailed("reason".to_string()).exit_code(), 1);
    assert_eq!(CliError::ConfigError("reason".to_string()).exit_code(), 2);
    assert_eq!(CliError::AuthError("reason".to_string()).exit_code(), 3);
    assert_eq!(CliError::NetworkError("reason".to_string()).exit_code(), 4);
    assert_eq!(CliError::InvalidArguments("reason".to_string()).exit_code(), 5);
    assert_eq!(CliError::Other("reason".to_string()).exit_code(), 1);
}

#[test]
fn test_report_uses_the_variant_exit_code() {
    use std::process::{ExitCode, Termination};

    let reported = CliError::ConfigError("reason".to_string()).report();
    assert_eq!(
        format!("{:?}", reported),
        format!("{:?}", ExitCode::from(2))
    );
}

#[test]
fn test_from_anyhow_error() {
    let source = anyhow::anyhow!("something went wrong");
    let error: CliError = source.into();
    assert!(matches!(error, CliError::Other(_)));
    assert_eq!(error.to_string(), "Error: something went wrong");
}
