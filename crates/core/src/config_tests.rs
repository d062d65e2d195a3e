use crate::config::{split_list, ValidationConfig};
use proptest::prelude::*;

#[test]
fn test_validation_config_default_disables_every_rule() {
    let config = ValidationConfig::default();

    assert!(config.allowed_actors.is_empty());
    assert!(config.title_pattern.is_empty());
    assert_eq!(config.min_length, 0);
    assert_eq!(config.max_length, 0);
    assert!(config.allowed_prefixes.is_empty());
    assert!(config.disallowed_prefixes.is_empty());
    assert!(!config.prefix_case_sensitive);
}

#[test]
fn test_split_list_basic() {
    assert_eq!(split_list("fix:,feat:"), vec!["fix:", "feat:"]);
}

#[test]
fn test_split_list_single_entry() {
    assert_eq!(split_list("release-bot"), vec!["release-bot"]);
}

#[test]
fn test_split_list_empty_input_yields_empty_list() {
    assert!(split_list("").is_empty());
}

#[test]
fn test_split_list_drops_empty_segments() {
    assert_eq!(split_list("fix:,,feat:,"), vec!["fix:", "feat:"]);
}

#[test]
fn test_split_list_preserves_whitespace() {
    // Entries are taken verbatim; the inputs are machine generated and a
    // stray space is part of the configured value.
    assert_eq!(split_list("fix: ,feat:"), vec!["fix: ", "feat:"]);
}

proptest! {
    #[test]
    fn test_split_list_never_yields_empty_entries(raw in "[a-z:,]{0,40}") {
        for entry in split_list(&raw) {
            prop_assert!(!entry.is_empty());
        }
    }
}
