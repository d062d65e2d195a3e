use crate::models::PullRequest;
use serde_json::json;

#[test]
fn test_pull_request_deserialization() {
    let value = json!({
        "number": 42,
        "title": "fix: resolve login issue"
    });

    let pr: PullRequest = serde_json::from_value(value).unwrap();
    assert_eq!(pr.number, 42);
    assert_eq!(pr.title, "fix: resolve login issue");
}

#[test]
fn test_pull_request_serialization_round_trip() {
    let pr = PullRequest {
        number: 7,
        title: "feat: add feature".to_string(),
    };

    let serialized = serde_json::to_string(&pr).unwrap();
    let deserialized: PullRequest = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized.number, pr.number);
    assert_eq!(deserialized.title, pr.title);
}

#[test]
fn test_pull_request_deserialization_ignores_extra_fields() {
    // Provider API responses carry far more fields than the pipeline
    // reads; deserialization must not choke on them.
    let value = json!({
        "number": 42,
        "title": "fix: resolve login issue",
        "draft": false,
        "user": { "login": "octocat" }
    });

    let pr: PullRequest = serde_json::from_value(value).unwrap();
    assert_eq!(pr.number, 42);
}
