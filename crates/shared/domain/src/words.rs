//! Number to English words.
//!
//! `integer_to_words` covers 0 through 999 999 999 by recursing on the
//! hundred / thousand / million magnitudes. `amount_to_words` builds the
//! dollar and cent phrases on top of it.

use crate::amount::AmountValue;
use crate::constants::{
    MAJOR_UNIT_PLURAL, MAJOR_UNIT_SINGULAR, MAX_WORDS_NUMBER, MINOR_UNIT_PLURAL,
    MINOR_UNIT_SINGULAR, UNIT_CONJUNCTION,
};
use crate::error::{DomainError, DomainResult};

const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Indexed by the tens digit; 0 and 1 are handled by `ONES` and `TEENS`.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Magnitude words, largest first, with the value each one stands for.
const MAGNITUDES: [(i64, &str); 3] = [
    (1_000_000, "million"),
    (1_000, "thousand"),
    (100, "hundred"),
];

/// English words for a number between 0 and 999 999 999 (inclusive).
///
/// # Errors
/// Returns a range error for negative numbers or numbers above 999 999 999.
pub fn integer_to_words(n: i64) -> DomainResult<String> {
    if !(0..=MAX_WORDS_NUMBER).contains(&n) {
        return Err(DomainError::range(format!(
            "Number should be between 0 and 999 999 999; got {}",
            n
        )));
    }

    let mut words = String::new();
    push_words(&mut words, n);
    Ok(words)
}

/// Appends the words for `n` (already known to be in range).
fn push_words(out: &mut String, n: i64) {
    // Indexing below is bounded: each branch only sees n within its magnitude.
    match n {
        0..=9 => out.push_str(ONES[n as usize]),
        10..=19 => out.push_str(TEENS[(n - 10) as usize]),
        20..=99 => {
            out.push_str(TENS[(n / 10) as usize]);
            if n % 10 != 0 {
                out.push('-');
                out.push_str(ONES[(n % 10) as usize]);
            }
        }
        _ => {
            let (magnitude, name) = MAGNITUDES
                .iter()
                .copied()
                .find(|(magnitude, _)| n >= *magnitude)
                .unwrap_or(MAGNITUDES[MAGNITUDES.len() - 1]);

            push_words(out, n / magnitude);
            out.push(' ');
            out.push_str(name);

            let remainder = n % magnitude;
            if remainder != 0 {
                out.push(' ');
                push_words(out, remainder);
            }
        }
    }
}

/// English words for a full amount, e.g. "twenty-five dollars and ten cents".
///
/// The cent phrase is left out when there are no cents; "dollar" and "cent"
/// are singular only for a count of exactly one.
pub fn amount_to_words(amount: &AmountValue) -> String {
    let dollars = unit_phrase(amount.dollars(), MAJOR_UNIT_SINGULAR, MAJOR_UNIT_PLURAL);
    if amount.cents() == 0 {
        return dollars;
    }

    let cents = unit_phrase(amount.cents(), MINOR_UNIT_SINGULAR, MINOR_UNIT_PLURAL);
    format!("{} {} {}", dollars, UNIT_CONJUNCTION, cents)
}

fn unit_phrase(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        return format!("one {}", singular);
    }

    // Both counts stay within the formatter's domain by the amount invariant.
    let mut phrase = String::new();
    push_words(&mut phrase, count);
    phrase.push(' ');
    phrase.push_str(plural);
    phrase
}
