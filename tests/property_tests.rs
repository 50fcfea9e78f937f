//! Property-based tests for branch normalization.
//!
//! These tests use proptest to verify the naming invariants hold across
//! randomly generated branch names and prefixes.

use proptest::prelude::*;

use safebranch::core::naming::{normalize, MAX_SLUG_LEN};
use safebranch::core::types::BranchSlug;

/// Strategy for branch names as they show up in CI: mostly slug-friendly
/// characters with separators, punctuation and the odd non-ASCII char.
fn branch_name() -> impl Strategy<Value = String> {
    let ch = prop_oneof![
        4 => prop::char::range('a', 'z'),
        2 => prop::char::range('A', 'Z'),
        2 => prop::char::range('0', '9'),
        2 => Just('-'),
        1 => Just('/'),
        1 => Just('_'),
        1 => Just('.'),
        1 => Just(' '),
        1 => Just('é'),
    ];
    prop::collection::vec(ch, 0..40).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for well-behaved safe prefixes (start with a lowercase letter).
fn letter_safe_prefix() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,3}"
}

proptest! {
    /// The slug never exceeds the maximum length.
    #[test]
    fn length_is_bounded(branch in branch_name(), strip in "[a-z/]{0,6}", safe in "\\PC{0,6}") {
        let slug = normalize(&branch, &strip, &safe);
        prop_assert!(slug.chars().count() <= MAX_SLUG_LEN);
    }

    /// With a well-behaved safe prefix, every character is in [a-z0-9-].
    #[test]
    fn charset_is_restricted(branch in branch_name(), strip in "[a-zA-Z/]{0,6}", safe in letter_safe_prefix()) {
        let slug = normalize(&branch, &strip, &safe);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {:?}", slug
        );
    }

    /// The slug never ends with a hyphen.
    #[test]
    fn no_trailing_hyphen(branch in branch_name(), strip in "[a-z/]{0,6}", safe in "[a-z0-9-]{0,4}") {
        let slug = normalize(&branch, &strip, &safe);
        prop_assert!(!slug.ends_with('-'));
    }

    /// With a non-empty, letter-first safe prefix the slug satisfies the full contract.
    #[test]
    fn result_is_valid_slug(branch in branch_name(), strip in "[a-z/]{0,6}", safe in letter_safe_prefix()) {
        let slug = normalize(&branch, &strip, &safe);
        prop_assert!(BranchSlug::new(slug.clone()).is_ok(), "invalid slug {:?}", slug);
    }

    /// Normalizing a letter-leading slug again changes nothing.
    #[test]
    fn idempotent_on_own_output(branch in branch_name(), safe in letter_safe_prefix()) {
        let slug = normalize(&branch, "", &safe);
        prop_assert_eq!(normalize(&slug, "", &safe), slug.clone());
        prop_assert_eq!(normalize(&slug, "", ""), slug);
    }

    /// The strip prefix is removed exactly once, and only from the front.
    #[test]
    fn prefix_stripped_once(rest in "[a-z][a-z0-9]{0,8}", repeat in any::<bool>()) {
        let tail = if repeat { format!("feature/{rest}") } else { rest.clone() };
        let branch = format!("feature/{tail}");

        let slug = normalize(&branch, "feature/", "z");
        let expected = normalize(&tail, "", "z");
        prop_assert_eq!(slug, expected);
    }

    /// A prefix that only appears later in the branch is not stripped.
    #[test]
    fn interior_prefix_not_stripped(head in "[a-z]{1,3}", rest in "[a-z]{0,4}") {
        let branch = format!("{head}/feature/{rest}");
        prop_assert_eq!(
            normalize(&branch, "feature/", "z"),
            normalize(&branch, "", "z")
        );
    }
}

#[test]
fn documented_scenarios() {
    let cases = [
        ("Feature/ABC-123", "Feature/", "z", "abc-123"),
        ("123-build", "", "z", "z123-build"),
        ("feat/long-branch-name-here", "feat/", "z", "long-branch"),
        ("---", "", "q", "q"),
        ("", "", "", ""),
    ];

    for (source, strip, safe, expected) in cases {
        assert_eq!(
            normalize(source, strip, safe),
            expected,
            "normalize({source:?}, {strip:?}, {safe:?})"
        );
    }
}
