//! Property-based tests for amounts and word formatting.

use domain::{amount_to_words, integer_to_words, parse, AmountValue, MAX_MINOR_UNITS};
use proptest::prelude::*;

const ONES: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Renders cents in the input convention without group separators: `1234,05`.
fn plain_text(cents: i64) -> String {
    format!("{},{:02}", cents / 100, cents % 100)
}

proptest! {
    #[test]
    fn prop_words_contain_no_digits(n in 0i64..=999_999_999) {
        let words = integer_to_words(n).unwrap();
        prop_assert!(!words.is_empty());
        prop_assert!(!words.chars().any(|c| c.is_ascii_digit()));
        prop_assert!(!words.ends_with('-'));
    }

    #[test]
    fn prop_words_are_deterministic(n in 0i64..=999_999_999) {
        prop_assert_eq!(integer_to_words(n).unwrap(), integer_to_words(n).unwrap());
    }

    #[test]
    fn prop_compound_tens_end_with_hyphenated_ones(n in 0i64..=999_999_999) {
        let last_two = n % 100;
        let words = integer_to_words(n).unwrap();
        if (21..=99).contains(&last_two) && last_two % 10 != 0 {
            let suffix = format!("-{}", ONES[(last_two % 10 - 1) as usize]);
            prop_assert!(words.ends_with(&suffix), "{} -> {}", n, words);
        }
    }

    #[test]
    fn prop_out_of_domain_is_rejected(n in prop_oneof![i64::MIN..0i64, 1_000_000_000i64..=i64::MAX]) {
        prop_assert!(integer_to_words(n).is_err());
    }

    #[test]
    fn prop_minor_units_round_trip(cents in 0i64..=MAX_MINOR_UNITS) {
        let amount = AmountValue::from_minor_units(cents).unwrap();
        prop_assert_eq!(amount.minor_units(), cents);
        prop_assert_eq!(AmountValue::from_major_units(amount.major_units()).unwrap(), amount);
    }

    #[test]
    fn prop_parse_accepts_rendered_amounts(cents in 0i64..=MAX_MINOR_UNITS) {
        let amount = AmountValue::from_minor_units(cents).unwrap();
        prop_assert_eq!(parse(&amount.to_string()).unwrap(), amount);
        prop_assert_eq!(parse(&plain_text(cents)).unwrap(), amount);
    }

    #[test]
    fn prop_units_plural_except_exactly_one(cents in 0i64..=MAX_MINOR_UNITS) {
        let amount = AmountValue::from_minor_units(cents).unwrap();
        let words = amount_to_words(&amount);

        if amount.dollars() == 1 {
            prop_assert!(words.starts_with("one dollar"));
            prop_assert!(!words.starts_with("one dollars"));
        } else {
            prop_assert!(words.contains(" dollars"));
        }

        match amount.cents() {
            0 => prop_assert!(!words.contains("cent")),
            1 => prop_assert!(words.ends_with(" and one cent")),
            _ => prop_assert!(words.ends_with(" cents")),
        }
    }

    #[test]
    fn prop_formatting_is_idempotent(cents in 0i64..=MAX_MINOR_UNITS) {
        let amount = AmountValue::from_minor_units(cents).unwrap();
        prop_assert_eq!(amount_to_words(&amount), amount_to_words(&amount));
    }
}
