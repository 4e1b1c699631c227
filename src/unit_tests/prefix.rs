use super::*;

use std::collections::BTreeSet;

// Both halves live in one test: the global counter is process-wide state,
// and a second #[test] touching it would race with this one under the
// default parallel test runner.
#[test]
fn prefix_counters_increment_reset_and_stay_independent() {
    reset_prefix_counter();
    assert_eq!(next_default_prefix(), "C0");
    assert_eq!(next_default_prefix(), "C1");

    let ctx = PrefixContext::new();
    assert_eq!(ctx.next_prefix(), "C0");
    assert_eq!(ctx.next_prefix(), "C1");

    reset_prefix_counter();
    assert_eq!(next_default_prefix(), "C0");
}

#[test]
fn apply_prefix_renames_only_auxiliary_variables() {
    let original: BTreeSet<&str> = ["a", "b"].into_iter().collect();
    let switches = vec![Switch::new(
        ["a".to_string(), "b".to_string()],
        ["aux0".to_string()],
        0,
        0,
    )];
    let renamed = apply_prefix(&switches, &original, "C3");
    assert!(renamed[0].left.contains("a"));
    assert!(renamed[0].left.contains("b"));
    assert!(renamed[0].right.contains("C3_aux0"));
    assert!(!renamed[0].right.contains("aux0"));
}
