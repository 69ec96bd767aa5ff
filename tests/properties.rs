// ============================================================================
// Property Tests
// Invariants of evaluation, filtering and value binding
// ============================================================================

use decimal_entry::numeric::MAX_SCALE;
use decimal_entry::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn us_field(scale: u32) -> DecimalField {
    DecimalField::with_separators(
        FieldConfig::new(scale).with_min_scale(0),
        Separators::new(',', '.'),
    )
}

fn german_field(scale: u32) -> DecimalField {
    DecimalField::with_separators(
        FieldConfig::new(scale).with_min_scale(0),
        Separators::new('.', ','),
    )
}

proptest! {
    /// Digits with one fraction mark evaluate to the literal rounded to scale
    #[test]
    fn literal_matches_rounded_value(
        int_part in 0u64..1_000_000_000,
        frac_digits in "[0-9]{0,8}",
        scale in 0u32..6,
    ) {
        let literal = if frac_digits.is_empty() {
            int_part.to_string()
        } else {
            format!("{}.{}", int_part, frac_digits)
        };
        let expected = Decimal::from_str(&literal)
            .unwrap()
            .round_dp_with_strategy(scale, RoundingMode::HalfUp.strategy());

        let mut field = us_field(scale);
        prop_assert!(field.replace_text(0, 0, &literal).is_applied());
        prop_assert_eq!(field.commit(), expected);

        let mut german = german_field(scale);
        let localized = literal.replace('.', ",");
        prop_assert!(german.replace_text(0, 0, &localized).is_applied());
        prop_assert_eq!(german.commit(), expected);
    }

    /// Sums evaluate like the arithmetic they spell out
    #[test]
    fn sum_expression_evaluates(a in 0i64..100_000, b in 0i64..100_000) {
        let mut field = us_field(2);
        field.replace_text(0, 0, &format!("{}+{}", a, b));
        prop_assert_eq!(field.commit(), Decimal::from(a + b));
    }

    /// Whitespace-only text is zero
    #[test]
    fn blank_text_is_zero(spaces in " {0,8}") {
        let evaluator = DecimalEvaluator::new(Separators::default());
        let evaluation = evaluator.evaluate(&spaces, &FieldConfig::default());
        prop_assert_eq!(evaluation.value, Decimal::ZERO);
        prop_assert_eq!(evaluation.source, EvaluationSource::Empty);
    }

    /// Edits containing a disallowed character leave the text untouched
    #[test]
    fn disallowed_edit_preserves_text(
        prefix in "[0-9]{1,6}",
        bad in "[a-zA-Z =%^&]",
    ) {
        let mut field = us_field(2);
        field.replace_text(0, 0, &prefix);
        let before = field.text().to_string();
        let end = before.chars().count();

        prop_assert_eq!(field.replace_text(end, end, &bad), EditOutcome::Rejected);
        prop_assert_eq!(field.text(), before.as_str());
    }

    /// Setting a value and reading it back yields the value rounded to scale
    #[test]
    fn set_decimal_round_trip(mantissa in -1_000_000_000i64..1_000_000_000, exp in 0u32..8, scale in 0u32..6) {
        let value = Decimal::new(mantissa, exp);
        let mut field = us_field(scale);
        field.set_decimal(value);

        let expected = value.round_dp_with_strategy(scale, RoundingMode::HalfUp.strategy());
        prop_assert_eq!(field.decimal(), Some(expected));

        // Rendered text parses back to the bound value
        prop_assert_eq!(field.current_value(), expected);
    }

    /// Any requested scale keeps a typed literal, clamped to the widest scale
    #[test]
    fn scale_changes_keep_literal(
        int_part in 0u32..100_000,
        frac_digits in "[0-9]{1,4}",
        scale in 0u32..40,
    ) {
        let literal = format!("{}.{}", int_part, frac_digits);
        let mut field = us_field(2);
        field.replace_text(0, 0, &literal);
        field.set_scale(scale);

        let effective = scale.min(MAX_SCALE);
        let expected = Decimal::from_str(&literal)
            .unwrap()
            .round_dp_with_strategy(effective, RoundingMode::HalfUp.strategy());
        prop_assert_eq!(field.config().scale, effective);
        prop_assert_eq!(field.decimal(), Some(expected));
        prop_assert_eq!(field.current_value(), expected);
    }

    /// Deletions never consume a pending keypad fraction
    #[test]
    fn delete_keeps_keypad_fraction(digits in "[0-9]{2,8}", cut in 0usize..8) {
        let mut field = us_field(2);
        field.replace_text(0, 0, &digits);
        let len = digits.chars().count();
        let cut = cut.min(len - 1);

        field.key_pressed(KeyCode::Decimal);
        prop_assert!(field.delete_text(cut, cut + 1).is_applied());

        let mut expected: String = digits.chars().take(cut).collect();
        expected.extend(digits.chars().skip(cut + 1));
        prop_assert_eq!(field.text(), expected.as_str());

        let end = len - 1;
        prop_assert!(field.replace_text(end, end, "q").is_applied());
        expected.push('.');
        prop_assert_eq!(field.text(), expected.as_str());
    }

    /// Arbitrary input never panics and always yields a scaled value
    #[test]
    fn evaluation_is_total(text in "[-0-9.,()+*/ ]{0,24}") {
        let evaluator = DecimalEvaluator::new(Separators::default());
        let evaluation = evaluator.evaluate(&text, &FieldConfig::default());
        prop_assert!(evaluation.value.scale() == 2 || evaluation.value.is_zero());
    }
}
