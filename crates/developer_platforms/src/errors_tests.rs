use crate::errors::Error;

#[test]
fn test_api_error_display() {
    let error = Error::ApiError();
    assert_eq!(error.to_string(), "API request failed");
}

#[test]
fn test_auth_error_display() {
    let error = Error::AuthError("Invalid token".to_string());
    assert_eq!(error.to_string(), "Authentication failed: Invalid token");
}

#[test]
fn test_invalid_response_display() {
    let error = Error::InvalidResponse;
    assert_eq!(error.to_string(), "Invalid response format");
}

#[test]
fn test_error_is_debug() {
    let error = Error::AuthError("expired".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("AuthError"));
}
