//! Domain-level errors.
//!
//! One variant per way an amount can be rejected. They are independent of how
//! the caller presents them (console line, HTML form, JSON body).

use thiserror::Error;

/// Domain-specific errors for amount parsing, validation and formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Text is not a number under the comma/space convention
    #[error("Invalid number format: {0}")]
    Format(String),

    /// Text holds a number too large (or too precise) for exact decimal parsing
    #[error("Numeric overflow: {0}")]
    Overflow(String),

    /// Value is negative or above the upper bound
    #[error("{0}")]
    Range(String),

    /// Value has sub-cent precision
    #[error("{0}")]
    Granularity(String),
}

impl DomainError {
    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        DomainError::Format(msg.into())
    }

    /// Create an overflow error
    pub fn overflow(msg: impl Into<String>) -> Self {
        DomainError::Overflow(msg.into())
    }

    /// Create a range error
    pub fn range(msg: impl Into<String>) -> Self {
        DomainError::Range(msg.into())
    }

    /// Create a granularity error
    pub fn granularity(msg: impl Into<String>) -> Self {
        DomainError::Granularity(msg.into())
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Format(_) => "FORMAT_ERROR",
            DomainError::Overflow(_) => "OVERFLOW_ERROR",
            DomainError::Range(_) => "RANGE_ERROR",
            DomainError::Granularity(_) => "GRANULARITY_ERROR",
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
