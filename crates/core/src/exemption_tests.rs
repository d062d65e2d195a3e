use crate::exemption::{has_common_element, is_actor_exempt};
use proptest::prelude::*;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_has_common_element_with_shared_value() {
    let a = strings(&["alpha", "beta"]);
    let b = strings(&["gamma", "beta"]);

    assert!(has_common_element(&a, &b));
}

#[test]
fn test_has_common_element_without_shared_value() {
    let a = strings(&["alpha", "beta"]);
    let b = strings(&["gamma", "delta"]);

    assert!(!has_common_element(&a, &b));
}

#[test]
fn test_has_common_element_with_empty_inputs() {
    let a: Vec<String> = Vec::new();
    let b = strings(&["alpha"]);

    assert!(!has_common_element(&a, &b));
    assert!(!has_common_element(&b, &a));
    assert!(!has_common_element(&a, &a));
}

#[test]
fn test_has_common_element_is_exact_match() {
    let a = strings(&["Release-Bot"]);
    let b = strings(&["release-bot"]);

    assert!(!has_common_element(&a, &b));
}

#[test]
fn test_actor_exempt_when_login_present() {
    let allowed = strings(&["bot-x"]);
    let logins = strings(&["octocat", "bot-x"]);

    assert_eq!(is_actor_exempt(&allowed, &logins), Some("bot-x".to_string()));
}

#[test]
fn test_not_exempt_when_login_absent() {
    let allowed = strings(&["bot-x"]);
    let logins = strings(&["octocat"]);

    assert_eq!(is_actor_exempt(&allowed, &logins), None);
}

#[test]
fn test_empty_actor_list_never_exempts() {
    let allowed: Vec<String> = Vec::new();
    let logins = strings(&["octocat"]);

    assert_eq!(is_actor_exempt(&allowed, &logins), None);
}

#[test]
fn test_no_logins_in_event_never_exempts() {
    let allowed = strings(&["bot-x"]);
    let logins: Vec<String> = Vec::new();

    assert_eq!(is_actor_exempt(&allowed, &logins), None);
}

proptest! {
    #[test]
    fn test_has_common_element_is_symmetric(
        a in proptest::collection::vec("[a-z]{1,8}", 0..6),
        b in proptest::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        prop_assert_eq!(has_common_element(&a, &b), has_common_element(&b, &a));
    }

    #[test]
    fn test_exemption_agrees_with_intersection(
        a in proptest::collection::vec("[a-z]{1,8}", 0..6),
        b in proptest::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        // A run is exempt exactly when the configured list intersects the
        // event logins, and the reported actor is drawn from both sides.
        match is_actor_exempt(&a, &b) {
            Some(actor) => {
                prop_assert!(has_common_element(&a, &b));
                prop_assert!(a.contains(&actor));
                prop_assert!(b.contains(&actor));
            }
            None => prop_assert!(!has_common_element(&a, &b)),
        }
    }

    #[test]
    fn test_shared_element_implies_common(
        mut a in proptest::collection::vec("[a-z]{1,8}", 1..6),
        b in proptest::collection::vec("[a-z]{1,8}", 0..6),
        shared in "[a-z]{1,8}",
    ) {
        a.push(shared.clone());
        let mut b = b;
        b.push(shared);
        prop_assert!(has_common_element(&a, &b));
    }
}
