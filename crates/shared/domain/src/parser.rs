//! Amount parser - text to [`AmountValue`].
//!
//! Accepts a comma as decimal separator and single spaces between digits as
//! thousands separators, e.g. `"999 999 999,99"`. Surrounding whitespace is
//! ignored. Signs, periods and exponents are rejected.

use rust_decimal::Decimal;

use crate::amount::AmountValue;
use crate::constants::{DECIMAL_SEPARATOR, GROUP_SEPARATOR};
use crate::error::{DomainError, DomainResult};

/// Largest scale an exact decimal can carry.
const MAX_SCALE: usize = 28;

/// Parse text into a validated amount.
///
/// # Errors
/// * `Format` if the text is not a number under the comma/space convention
/// * `Overflow` if the number does not fit an exact decimal
/// * `Range` / `Granularity` from [`AmountValue::from_major_units`]
pub fn parse(text: &str) -> DomainResult<AmountValue> {
    let value = parse_decimal(text)?;
    AmountValue::from_major_units(value)
}

/// Parse text into an exact decimal without applying amount bounds.
pub fn parse_decimal(text: &str) -> DomainResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::format("empty input"));
    }

    let (integer_part, fraction_part) = match trimmed.split_once(DECIMAL_SEPARATOR) {
        Some((integer, fraction)) => (integer, fraction),
        None => (trimmed, ""),
    };

    let integer_digits = strip_group_separators(integer_part, trimmed)?;
    if let Some(c) = fraction_part.chars().find(|c| !c.is_ascii_digit()) {
        return Err(DomainError::format(format!(
            "unexpected character {:?} in {:?}",
            c, trimmed
        )));
    }
    if integer_digits.is_empty() && fraction_part.is_empty() {
        return Err(DomainError::format(format!("no digits in {:?}", trimmed)));
    }

    let integer_digits = integer_digits.trim_start_matches('0');
    let fraction_digits = fraction_part.trim_end_matches('0');
    if fraction_digits.len() > MAX_SCALE {
        return Err(DomainError::overflow(format!(
            "more than {} decimal places in {:?}",
            MAX_SCALE, trimmed
        )));
    }

    let mut mantissa: i128 = 0;
    for digit in integer_digits.bytes().chain(fraction_digits.bytes()) {
        mantissa = mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(i128::from(digit - b'0')))
            .ok_or_else(|| DomainError::overflow(format!("{:?} has too many digits", trimmed)))?;
    }

    // Scale is bounded by MAX_SCALE above.
    let scale = fraction_digits.len() as u32;
    Decimal::try_from_i128_with_scale(mantissa, scale)
        .map_err(|_| DomainError::overflow(format!("{:?} exceeds the decimal range", trimmed)))
}

/// Strip group separators from the integer part, rejecting anything that is
/// not a digit or a single space between two digits.
fn strip_group_separators(integer_part: &str, input: &str) -> DomainResult<String> {
    let mut digits = String::with_capacity(integer_part.len());
    let mut previous: Option<char> = None;

    for c in integer_part.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c == GROUP_SEPARATOR {
            if !previous.is_some_and(|p| p.is_ascii_digit()) {
                return Err(DomainError::format(format!(
                    "misplaced group separator in {:?}",
                    input
                )));
            }
        } else {
            return Err(DomainError::format(format!(
                "unexpected character {:?} in {:?}",
                c, input
            )));
        }
        previous = Some(c);
    }

    if previous == Some(GROUP_SEPARATOR) {
        return Err(DomainError::format(format!(
            "misplaced group separator in {:?}",
            input
        )));
    }

    Ok(digits)
}
