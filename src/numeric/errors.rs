// ============================================================================
// Numeric Errors
// Error types for decimal parsing and arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or computing decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit in a 96-bit decimal mantissa
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string is not a plain decimal literal
    InvalidInput,
    /// Requested scale exceeds the supported maximum
    ScaleOutOfRange(u32),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::ScaleOutOfRange(scale) => {
                write!(f, "scale {} is out of range (maximum 28)", scale)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
