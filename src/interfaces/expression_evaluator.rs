// ============================================================================
// Expression Evaluator Interface
// Defines the contract for arithmetic fallback evaluation
// ============================================================================

use crate::expr::ExprResult;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Strategy interface for evaluating field text that is not a plain number
/// Implementations: ArithmeticEvaluator (constrained + - * / and parentheses)
pub trait ExpressionEvaluator: Send + Sync {
    /// Evaluate a normalized expression (`.` fraction mark, no grouping)
    ///
    /// # Returns
    /// The unrounded numeric result, or the reason evaluation failed
    fn evaluate(&self, expression: &str) -> ExprResult<Decimal>;

    /// Get the evaluator name for logging
    fn name(&self) -> &str;
}

/// How a field's text produced its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationSource {
    /// Text was empty or whitespace
    Empty,
    /// Text was a plain decimal literal
    Literal,
    /// Text was an arithmetic expression
    Expression,
    /// Text could not be evaluated; treated as empty
    Invalid,
}

/// Result of evaluating a field's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Value rounded to the field scale; zero unless `source` produced one
    pub value: Decimal,
    pub source: EvaluationSource,
}

impl Evaluation {
    pub fn zero(source: EvaluationSource) -> Self {
        Self {
            value: Decimal::ZERO,
            source,
        }
    }

    /// True if the text produced a number of its own
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.source,
            EvaluationSource::Literal | EvaluationSource::Expression
        )
    }
}
