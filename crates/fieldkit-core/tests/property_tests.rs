//! Property-based tests for the normalizers and admission guards.
//!
//! Uses proptest to verify totality, idempotence, and output alphabets over
//! arbitrary printable-ASCII input.

use proptest::prelude::*;

use fieldkit_core::phone::admit_paste;
use fieldkit_core::{collapse_whitespace, normalize_numeric, NumberField};

/// Arbitrary printable-ASCII strings, including empty.
fn printable_ascii() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,200}").expect("valid regex")
}

proptest! {
    /// Output contains only digits and dots, whatever goes in.
    #[test]
    fn numeric_output_alphabet(raw in printable_ascii()) {
        let out = normalize_numeric(&raw);
        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
    }

    /// Normalizing twice equals normalizing once.
    #[test]
    fn numeric_idempotent(raw in printable_ascii()) {
        let once = normalize_numeric(&raw);
        prop_assert_eq!(normalize_numeric(&once), once);
    }

    /// Every digit and dot of the input survives, in order.
    #[test]
    fn numeric_preserves_digit_subsequence(raw in printable_ascii()) {
        let expected: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
        prop_assert_eq!(normalize_numeric(&raw), expected);
    }

    /// Collapsed output never contains two adjacent spaces.
    #[test]
    fn whitespace_no_double_spaces(raw in printable_ascii()) {
        let out = collapse_whitespace(&raw);
        prop_assert!(!out.contains("  "));
    }

    /// Collapsing twice equals collapsing once.
    #[test]
    fn whitespace_idempotent(raw in printable_ascii()) {
        let once = collapse_whitespace(&raw);
        prop_assert_eq!(collapse_whitespace(&once), once);
    }

    /// An accepted value always lands inside the configured range, or is
    /// empty when the input held no digits.
    #[test]
    fn number_field_accepts_within_range(raw in printable_ascii(), min in 0u128..1000, span in 0u128..1000) {
        let max = min + span;
        let mut field = NumberField::new(Some(min), Some(max), None);
        let accepted = field.apply(&raw).to_string();
        if accepted.is_empty() {
            prop_assert!(!raw.chars().any(|c| c.is_ascii_digit()));
        } else {
            let n: u128 = accepted.parse().expect("accepted value is decimal");
            prop_assert!(n >= min && n <= max);
        }
    }

    /// Whatever a paste admits is all digits with at most one leading `+`.
    #[test]
    fn admitted_paste_matches_pattern(raw in printable_ascii()) {
        if let Some(cleaned) = admit_paste(&raw) {
            let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
            prop_assert!(!digits.is_empty());
            prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
