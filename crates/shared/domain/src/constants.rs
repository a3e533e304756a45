//! Domain-level constants.
//!
//! These constants define the amount bounds, the accepted text format and the
//! messages shown to users when input is rejected.

use rust_decimal::Decimal;

// =============================================================================
// Amount Bounds
// =============================================================================

/// Number of minor units (cents) in one major unit (dollar)
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Decimal places of the minor unit
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Largest representable amount in cents ($999 999 999,99)
pub const MAX_MINOR_UNITS: i64 = 99_999_999_999;

/// Largest representable amount in dollars
pub const MAX_MAJOR_UNITS: Decimal = Decimal::from_parts(1_215_752_191, 23, 0, false, 2);

/// Largest number the word formatter accepts
pub const MAX_WORDS_NUMBER: i64 = 999_999_999;

// =============================================================================
// Text Format
// =============================================================================

/// Decimal separator accepted by the parser
pub const DECIMAL_SEPARATOR: char = ',';

/// Thousands (group) separator accepted by the parser
pub const GROUP_SEPARATOR: char = ' ';

// =============================================================================
// Currency Names
// =============================================================================

pub const MAJOR_UNIT_SINGULAR: &str = "dollar";
pub const MAJOR_UNIT_PLURAL: &str = "dollars";
pub const MINOR_UNIT_SINGULAR: &str = "cent";
pub const MINOR_UNIT_PLURAL: &str = "cents";

/// Conjunction between the dollar and cent phrases
pub const UNIT_CONJUNCTION: &str = "and";

// =============================================================================
// User Messages
// =============================================================================

/// Shown when input text is not a number under the comma/space convention
pub const FORMAT_ERROR_MESSAGE: &str = "Input could not be recognized as a number. Please use ',' (comma) as decimal separator and spaces as optional thousands separator";

/// Shown when input text exceeds what exact decimal parsing can hold
pub const OVERFLOW_ERROR_MESSAGE: &str =
    "Value is too large or too small to be internally representable";
