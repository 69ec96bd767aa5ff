// ============================================================================
// Plain Decimal Parsing
// Strict literal parsing used before falling back to expression evaluation
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a plain decimal literal.
///
/// Accepted form: optional sign, integer digits, optional `.` followed by
/// fractional digits. At least one digit must be present. Grouping
/// separators and exponents are not accepted; callers normalize locale
/// text first.
///
/// # Examples
/// - "123" -> 123
/// - "-0.001" -> -0.001
/// - ".5" -> 0.5
/// - "5." -> 5
///
/// # Errors
/// - `InvalidInput` if the text is not a plain literal
/// - `Overflow` if the integer part does not fit a `Decimal`
pub fn parse_plain_decimal(s: &str) -> NumericResult<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    // Check for sign
    let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    };

    // Split on decimal point
    let (int_str, frac_str) = match s.find('.') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_str) || !all_digits(frac_str) {
        return Err(NumericError::InvalidInput);
    }
    if int_str.is_empty() && frac_str.is_empty() {
        return Err(NumericError::InvalidInput);
    }

    let mut canonical = String::with_capacity(int_str.len() + frac_str.len() + 3);
    if is_negative {
        canonical.push('-');
    }
    canonical.push_str(if int_str.is_empty() { "0" } else { int_str });
    if !frac_str.is_empty() {
        canonical.push('.');
        canonical.push_str(frac_str);
    }

    Decimal::from_str(&canonical).map_err(|_| NumericError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_and_fractions() {
        assert_eq!(parse_plain_decimal("123").unwrap(), Decimal::from(123));
        assert_eq!(parse_plain_decimal("123.456").unwrap(), Decimal::new(123456, 3));
        assert_eq!(parse_plain_decimal("-0.001").unwrap(), Decimal::new(-1, 3));
        assert_eq!(parse_plain_decimal("+7").unwrap(), Decimal::from(7));
    }

    #[test]
    fn test_partial_forms() {
        assert_eq!(parse_plain_decimal(".5").unwrap(), Decimal::new(5, 1));
        assert_eq!(parse_plain_decimal("5.").unwrap(), Decimal::from(5));
        assert_eq!(parse_plain_decimal(" 42 ").unwrap(), Decimal::from(42));
    }

    #[test]
    fn test_rejects_non_literals() {
        for input in ["", "-", ".", "+.", "1.2.3", "2+2", "1,5", "1e5", "--1", "abc"] {
            assert_eq!(
                parse_plain_decimal(input),
                Err(NumericError::InvalidInput),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(parse_plain_decimal(&huge), Err(NumericError::Overflow));
    }
}
