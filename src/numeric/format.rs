// ============================================================================
// Display Formatting
// Renders decimals for an entry field: no grouping, locale fraction mark
// ============================================================================

use super::rounding::{round_to_scale, RoundingMode, MAX_SCALE};
use rust_decimal::Decimal;

/// Output format for an entry field.
///
/// Grouping is never emitted so that the rendered text can be fed back
/// through the field's parser unchanged. Fractional digits are trimmed down
/// to `min_scale` and rounded at `max_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFormat {
    fraction: char,
    min_scale: u32,
    max_scale: u32,
    rounding: RoundingMode,
}

impl DisplayFormat {
    /// Create a format. Scales above [`MAX_SCALE`] are clamped.
    pub fn new(fraction: char, min_scale: u32, max_scale: u32, rounding: RoundingMode) -> Self {
        Self {
            fraction,
            min_scale: min_scale.min(MAX_SCALE),
            max_scale: max_scale.min(MAX_SCALE),
            rounding,
        }
    }

    /// The fractional separator used in output.
    pub fn fraction(&self) -> char {
        self.fraction
    }

    /// Minimum fractional digits. Never larger than the maximum.
    pub fn min_scale(&self) -> u32 {
        self.min_scale.min(self.max_scale)
    }

    /// Maximum fractional digits.
    pub fn max_scale(&self) -> u32 {
        self.max_scale
    }

    /// Render `value`.
    pub fn format(&self, value: Decimal) -> String {
        let rounded = round_to_scale(value, self.max_scale, self.rounding).unwrap_or(value);
        let trimmed = rounded.normalize();
        let digits = trimmed.scale().max(self.min_scale()) as usize;

        let text = format!("{:.*}", digits, trimmed);
        if self.fraction == '.' {
            text
        } else {
            text.replace('.', &self.fraction.to_string())
        }
    }
}
