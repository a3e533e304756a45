//! Domain layer - Dollar amounts and their English-words rendering.
//!
//! This crate contains pure domain logic with no I/O and no logging.
//! Callers (console, HTTP form) decide how errors are presented.
//!
//! ```
//! let amount = domain::parse("25,1").unwrap();
//! assert_eq!(amount.minor_units(), 2510);
//! assert_eq!(amount.to_words(), "twenty-five dollars and ten cents");
//! ```

pub mod amount;
pub mod constants;
pub mod error;
pub mod parser;
pub mod words;

pub use amount::AmountValue;
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use parser::{parse, parse_decimal};
pub use words::{amount_to_words, integer_to_words};

pub use rust_decimal::Decimal;
