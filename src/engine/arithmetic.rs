// ============================================================================
// Arithmetic Evaluator
// Default expression fallback: + - * / and parentheses over exact decimals
// ============================================================================

use crate::expr::{self, ExprResult};
use crate::interfaces::ExpressionEvaluator;
use rust_decimal::Decimal;

/// Arithmetic-only evaluator.
///
/// Identifiers, calls and any character outside the arithmetic alphabet are
/// rejected, so field text can never reach a general-purpose interpreter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticEvaluator;

impl ArithmeticEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl ExpressionEvaluator for ArithmeticEvaluator {
    fn evaluate(&self, expression: &str) -> ExprResult<Decimal> {
        expr::evaluate(expression)
    }

    fn name(&self) -> &str {
        "Arithmetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ExprError;

    #[test]
    fn test_evaluates_arithmetic() {
        let evaluator = ArithmeticEvaluator::new();
        assert_eq!(evaluator.evaluate("(1+2)*3").unwrap(), Decimal::from(9));
        assert_eq!(evaluator.name(), "Arithmetic");
    }

    #[test]
    fn test_rejects_script() {
        let evaluator = ArithmeticEvaluator::new();
        assert_eq!(
            evaluator.evaluate("Math.PI"),
            Err(ExprError::UnexpectedChar { ch: 'M', position: 0 })
        );
    }
}
