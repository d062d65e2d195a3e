use crate::checks::pattern::matches_pattern;
use proptest::prelude::*;

#[test]
fn test_matching_title() {
    assert!(matches_pattern("fix: correct bug", "^(fix|feat):").unwrap());
    assert!(matches_pattern("feat: add login", "^(fix|feat):").unwrap());
}

#[test]
fn test_non_matching_title() {
    assert!(!matches_pattern("correct bug", "^(fix|feat):").unwrap());
    assert!(!matches_pattern("docs: update", "^(fix|feat):").unwrap());
}

#[test]
fn test_search_semantics_match_anywhere() {
    // The pattern is unanchored unless the configuration anchors it.
    assert!(matches_pattern("JIRA-123 fix the thing", r"JIRA-\d+").unwrap());
}

#[test]
fn test_empty_pattern_matches_everything() {
    assert!(matches_pattern("anything", "").unwrap());
    assert!(matches_pattern("", "").unwrap());
}

#[test]
fn test_invalid_pattern_is_an_error() {
    assert!(matches_pattern("feat: add x", "((unclosed").is_err());
}

proptest! {
    #[test]
    fn test_arbitrary_titles_do_not_panic(title in "\\PC*") {
        let _ = matches_pattern(&title, r"^(build|chore|ci|docs|feat|fix|perf|refactor|revert|style|test)(\([a-z0-9_-]+\))?!?: .+");
    }
}
