// ============================================================================
// Decimal Evaluator
// Turns locale field text into a scaled decimal value
// ============================================================================

use crate::domain::{FieldConfig, Separators};
use crate::engine::ArithmeticEvaluator;
use crate::interfaces::{Evaluation, EvaluationSource, ExpressionEvaluator};
use crate::numeric::{parse_plain_decimal, round_to_scale};
use std::borrow::Cow;
use std::sync::Arc;

/// Evaluates field text: normalize separators, try a plain literal, then
/// fall back to the expression evaluator. Failures resolve to zero.
#[derive(Clone)]
pub struct DecimalEvaluator {
    separators: Separators,
    expression: Arc<dyn ExpressionEvaluator>,
}

impl DecimalEvaluator {
    /// Create an evaluator using the arithmetic fallback
    pub fn new(separators: Separators) -> Self {
        Self::with_expression_evaluator(separators, Arc::new(ArithmeticEvaluator::new()))
    }

    /// Create an evaluator with a custom expression fallback
    pub fn with_expression_evaluator(
        separators: Separators,
        expression: Arc<dyn ExpressionEvaluator>,
    ) -> Self {
        Self {
            separators,
            expression,
        }
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    /// Name of the expression fallback, for logging
    pub fn expression_evaluator_name(&self) -> &str {
        self.expression.name()
    }

    /// Strip grouping separators and turn the fraction mark into `.`.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Separators { group, fraction } = self.separators;
        if !text.contains(group) && (fraction == '.' || !text.contains(fraction)) {
            return Cow::Borrowed(text);
        }

        let normalized: String = text
            .chars()
            .filter(|&c| c != group)
            .map(|c| if c == fraction { '.' } else { c })
            .collect();
        Cow::Owned(normalized)
    }

    /// Evaluate `text` and round the result to `config.scale`.
    pub fn evaluate(&self, text: &str, config: &FieldConfig) -> Evaluation {
        if text.trim().is_empty() {
            return Evaluation::zero(EvaluationSource::Empty);
        }

        let normalized = self.normalize(text);

        let (raw, source) = match parse_plain_decimal(&normalized) {
            Ok(value) => (value, EvaluationSource::Literal),
            Err(_) => match self.expression.evaluate(&normalized) {
                Ok(value) => (value, EvaluationSource::Expression),
                Err(err) => {
                    tracing::trace!(
                        input = text,
                        evaluator = self.expression.name(),
                        error = %err,
                        "Field text did not evaluate; treating as empty"
                    );
                    return Evaluation::zero(EvaluationSource::Invalid);
                },
            },
        };

        match round_to_scale(raw, config.scale, config.rounding) {
            Ok(value) => Evaluation { value, source },
            Err(err) => {
                tracing::warn!(scale = config.scale, error = %err, "Cannot round to scale");
                Evaluation::zero(EvaluationSource::Invalid)
            },
        }
    }
}

impl std::fmt::Debug for DecimalEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecimalEvaluator")
            .field("separators", &self.separators)
            .field("expression", &self.expression.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{ExprError, ExprResult};
    use crate::numeric::RoundingMode;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn us() -> DecimalEvaluator {
        DecimalEvaluator::new(Separators::new(',', '.'))
    }

    fn german() -> DecimalEvaluator {
        DecimalEvaluator::new(Separators::new('.', ','))
    }

    #[test]
    fn test_literal_rounded_to_scale() {
        let config = FieldConfig::default();
        let eval = us().evaluate("12.345", &config);
        assert_eq!(eval.source, EvaluationSource::Literal);
        assert_eq!(eval.value, dec("12.35"));
        assert_eq!(eval.value.scale(), 2);
    }

    #[test]
    fn test_grouping_is_stripped() {
        let config = FieldConfig::default();
        assert_eq!(us().evaluate("1,234,567.5", &config).value, dec("1234567.50"));
        assert_eq!(german().evaluate("1.234.567,5", &config).value, dec("1234567.50"));
    }

    #[test]
    fn test_locale_fraction() {
        let config = FieldConfig::default();
        let eval = german().evaluate("3,14159", &config);
        assert_eq!(eval.source, EvaluationSource::Literal);
        assert_eq!(eval.value, dec("3.14"));
    }

    #[test]
    fn test_expression_fallback() {
        let config = FieldConfig::default();
        let eval = us().evaluate("2+2", &config);
        assert_eq!(eval.source, EvaluationSource::Expression);
        assert_eq!(eval.value, dec("4.00"));

        let eval = german().evaluate("10/3", &config);
        assert_eq!(eval.value, dec("3.33"));

        let eval = german().evaluate("1,5*2", &config);
        assert_eq!(eval.value, dec("3"));
    }

    #[test]
    fn test_empty_and_invalid_are_zero() {
        let config = FieldConfig::default();
        for (text, source) in [
            ("", EvaluationSource::Empty),
            ("   ", EvaluationSource::Empty),
            ("2+", EvaluationSource::Invalid),
            ("1/0", EvaluationSource::Invalid),
            ("((", EvaluationSource::Invalid),
        ] {
            let eval = us().evaluate(text, &config);
            assert_eq!(eval.source, source, "input {:?}", text);
            assert_eq!(eval.value, Decimal::ZERO);
            assert!(!eval.is_numeric());
        }
    }

    #[test]
    fn test_rounding_policy() {
        let config = FieldConfig::default().with_rounding(RoundingMode::HalfEven);
        assert_eq!(us().evaluate("0.125", &config).value, dec("0.12"));

        let config = FieldConfig::default();
        assert_eq!(us().evaluate("0.125", &config).value, dec("0.13"));
    }

    #[test]
    fn test_normalize_borrows_when_clean() {
        assert!(matches!(us().normalize("12.5"), Cow::Borrowed(_)));
        assert_eq!(german().normalize("1.000,25"), "1000.25");
    }

    struct Rejecting;

    impl ExpressionEvaluator for Rejecting {
        fn evaluate(&self, _expression: &str) -> ExprResult<Decimal> {
            Err(ExprError::Empty)
        }

        fn name(&self) -> &str {
            "Rejecting"
        }
    }

    #[test]
    fn test_custom_expression_evaluator() {
        let evaluator =
            DecimalEvaluator::with_expression_evaluator(Separators::default(), Arc::new(Rejecting));
        let config = FieldConfig::default();

        assert_eq!(evaluator.expression_evaluator_name(), "Rejecting");
        assert_eq!(evaluator.evaluate("7", &config).value, dec("7"));
        assert_eq!(
            evaluator.evaluate("3+4", &config).source,
            EvaluationSource::Invalid
        );
    }
}
