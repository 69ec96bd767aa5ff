// ============================================================================
// Expression Errors
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors raised while tokenizing, ordering or evaluating an expression.
///
/// Positions are character offsets into the expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprError {
    /// Expression contains no tokens
    Empty,
    /// Character outside the arithmetic alphabet
    UnexpectedChar { ch: char, position: usize },
    /// Literal with more than one fractional mark, or a lone mark
    MalformedNumber { position: usize },
    /// Operator without a left or right operand
    MissingOperand { position: usize },
    /// Two operands with nothing between them
    MissingOperator { position: usize },
    /// Parentheses do not pair up
    UnbalancedParens,
    /// Arithmetic failed during evaluation
    Arithmetic(NumericError),
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprError::Empty => write!(f, "empty expression"),
            ExprError::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character {:?} at position {}", ch, position)
            },
            ExprError::MalformedNumber { position } => {
                write!(f, "malformed number at position {}", position)
            },
            ExprError::MissingOperand { position } => {
                write!(f, "missing operand at position {}", position)
            },
            ExprError::MissingOperator { position } => {
                write!(f, "missing operator at position {}", position)
            },
            ExprError::UnbalancedParens => write!(f, "unbalanced parentheses"),
            ExprError::Arithmetic(err) => write!(f, "arithmetic error: {}", err),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExprError::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for ExprError {
    fn from(err: NumericError) -> Self {
        ExprError::Arithmetic(err)
    }
}

/// Result type alias for expression evaluation
pub type ExprResult<T> = Result<T, ExprError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExprError::UnexpectedChar { ch: 'x', position: 3 }.to_string(),
            "unexpected character 'x' at position 3"
        );
        assert_eq!(
            ExprError::Arithmetic(NumericError::DivisionByZero).to_string(),
            "arithmetic error: division by zero"
        );
    }

    #[test]
    fn test_from_numeric() {
        let err: ExprError = NumericError::Overflow.into();
        assert_eq!(err, ExprError::Arithmetic(NumericError::Overflow));
    }
}
