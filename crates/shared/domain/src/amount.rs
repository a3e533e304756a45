//! Amount value object - a validated dollar amount.
//!
//! The amount is stored as a whole number of cents, so sub-cent state cannot
//! be represented. Construction goes through the validating factories only.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::constants::{
    DECIMAL_SEPARATOR, GROUP_SEPARATOR, MAX_MAJOR_UNITS, MINOR_UNITS_PER_MAJOR, MINOR_UNIT_SCALE,
};
use crate::error::{DomainError, DomainResult};

/// One cent expressed in dollars.
const ONE_CENT: Decimal = Decimal::from_parts(1, 0, 0, false, MINOR_UNIT_SCALE);

/// Amount of money in dollars between 0 and $999 999 999,99 (inclusive).
///
/// Value object: immutable, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmountValue {
    minor_units: i64,
}

impl AmountValue {
    /// Create an amount from a decimal number of dollars.
    ///
    /// # Errors
    /// * `Range` if the value is negative or above $999 999 999,99
    /// * `Granularity` if the value is not a multiple of 0.01
    pub fn from_major_units(value: Decimal) -> DomainResult<Self> {
        if value < Decimal::ZERO {
            return Err(DomainError::range(format!(
                "Value should be positive; got {} dollars",
                locale_decimal(value)
            )));
        }
        if value > MAX_MAJOR_UNITS {
            return Err(DomainError::range(format!(
                "Value should be below $999 999 999,99; got {} dollars",
                locale_decimal(value)
            )));
        }
        if value % ONE_CENT != Decimal::ZERO {
            return Err(DomainError::granularity(format!(
                "Value should be a multiple of 0.01 dollars; got {} dollars",
                locale_decimal(value)
            )));
        }

        // Exact: the value is a whole number of cents, so dropping scale loses nothing.
        let mut cents = value;
        cents.rescale(MINOR_UNIT_SCALE);
        let minor_units = i64::try_from(cents.mantissa()).map_err(|_| {
            DomainError::range(format!(
                "Value should be below $999 999 999,99; got {} dollars",
                locale_decimal(value)
            ))
        })?;

        Ok(Self { minor_units })
    }

    /// Create an amount from a whole number of cents.
    ///
    /// Same bounds as [`AmountValue::from_major_units`]; granularity always holds.
    pub fn from_minor_units(cents: i64) -> DomainResult<Self> {
        Self::from_major_units(Decimal::new(cents, MINOR_UNIT_SCALE))
    }

    /// Full amount in dollars, with exactly two decimal places.
    pub fn major_units(&self) -> Decimal {
        Decimal::new(self.minor_units, MINOR_UNIT_SCALE)
    }

    /// Full amount in cents.
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Whole dollars, without the cents part.
    pub fn dollars(&self) -> i64 {
        self.minor_units / MINOR_UNITS_PER_MAJOR
    }

    /// Cents part, between 0 and 99.
    pub fn cents(&self) -> i64 {
        self.minor_units % MINOR_UNITS_PER_MAJOR
    }

    /// English words for this amount, e.g. "one dollar and five cents".
    pub fn to_words(&self) -> String {
        crate::words::amount_to_words(self)
    }
}

impl FromStr for AmountValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

/// Renders the amount the way it is typed in: `45 100,00`.
impl fmt::Display for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.dollars().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(digit);
        }
        write!(f, "{}{}{:02}", grouped, DECIMAL_SEPARATOR, self.cents())
    }
}

impl From<AmountValue> for Decimal {
    fn from(amount: AmountValue) -> Self {
        amount.major_units()
    }
}

impl TryFrom<Decimal> for AmountValue {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_major_units(value)
    }
}

/// Decimal rendered with the comma separator used for input.
fn locale_decimal(value: Decimal) -> String {
    value.to_string().replace('.', &DECIMAL_SEPARATOR.to_string())
}
