//! End-to-end conversion tests: text in, cents and words out.

use domain::{parse, AmountValue, DomainError};
use rstest::rstest;

// =============================================================================
// Successful Conversions
// =============================================================================

#[rstest]
#[case("0", 0, "zero dollars")]
#[case("1", 100, "one dollar")]
#[case("25,1", 2510, "twenty-five dollars and ten cents")]
#[case("0,01", 1, "zero dollars and one cent")]
#[case("45 100", 4_510_000, "forty-five thousand one hundred dollars")]
#[case(
    "999 999 999,99",
    99_999_999_999,
    "nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine dollars and ninety-nine cents"
)]
#[case(" 1 000 000,5 ", 100_000_050, "one million dollars and fifty cents")]
#[case("2,00", 200, "two dollars")]
fn test_dollars_to_words(#[case] input: &str, #[case] cents: i64, #[case] expected_words: &str) {
    let amount = parse(input).unwrap();
    assert_eq!(amount.minor_units(), cents);
    assert_eq!(amount.to_words(), expected_words);
}

#[rstest]
#[case("25,1")]
#[case("0")]
fn test_from_str_matches_parse(#[case] input: &str) {
    let via_from_str: AmountValue = input.parse().unwrap();
    assert_eq!(via_from_str, parse(input).unwrap());
}

// =============================================================================
// Rejected Input
// =============================================================================

#[rstest]
#[case("xyz")]
#[case("0.5")]
#[case("-1")]
#[case("")]
#[case("1 000.5")]
fn test_format_error(#[case] input: &str) {
    assert!(matches!(parse(input), Err(DomainError::Format(_))));
}

#[rstest]
#[case("100 000 000 000")]
#[case("1 000 000 000")]
#[case("999 999 999,991")]
fn test_range_error(#[case] input: &str) {
    assert!(matches!(parse(input), Err(DomainError::Range(_))));
}

#[rstest]
#[case("0,001")]
#[case("1,234")]
fn test_granularity_error(#[case] input: &str) {
    assert!(matches!(parse(input), Err(DomainError::Granularity(_))));
}

#[rstest]
fn test_overflow_error() {
    let input = "9".repeat(30);
    assert!(matches!(parse(&input), Err(DomainError::Overflow(_))));
}
