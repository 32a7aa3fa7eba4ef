//! Errors raised by the hard-failing conversions.

use std::fmt;

/// Error returned when text has no valid numeric interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// No hexadecimal digit was found where one was expected
    NoHexDigits(String),
    /// The value has a leading minus sign but the target is unsigned
    Negative(String),
    /// The digits describe a value wider than the target type
    Overflow(String),
}

impl ConvertError {
    /// The text that failed to convert.
    pub fn input(&self) -> &str {
        match self {
            ConvertError::NoHexDigits(s) | ConvertError::Negative(s) | ConvertError::Overflow(s) => s,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NoHexDigits(s) => write!(f, "Hex to int failed: no hex digits in '{}'", s),
            ConvertError::Negative(s) => write!(f, "Hex to int failed: '{}' is negative", s),
            ConvertError::Overflow(s) => {
                write!(f, "Hex to int failed: '{}' does not fit in 32 bits", s)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
