// ============================================================================
// Rounding Policy
// Scale normalization applied to every value an entry field exposes
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

/// Rounding policy used when a value is reduced to the display scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Midpoints round away from zero (2.345 -> 2.35, -2.345 -> -2.35)
    #[default]
    HalfUp,
    /// Midpoints round to the even neighbour (banker's rounding)
    HalfEven,
    /// Truncate toward zero
    Down,
    /// Round away from zero
    Up,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceiling,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
        }
    }
}

/// Round `value` to exactly `scale` fractional digits.
///
/// Values with fewer digits are padded, so `round_to_scale(1.5, 2)` carries
/// scale 2 (`1.50`). A zero result never keeps a negative sign.
///
/// Padding stops where the 96-bit mantissa is full: a value too wide to
/// carry `scale` trailing zeros keeps the largest scale that fits, with
/// no fractional digits lost. [`DisplayFormat`](super::DisplayFormat)
/// still pads the rendered text.
///
/// # Errors
/// Returns `ScaleOutOfRange` if `scale` exceeds [`MAX_SCALE`].
pub fn round_to_scale(value: Decimal, scale: u32, mode: RoundingMode) -> NumericResult<Decimal> {
    if scale > MAX_SCALE {
        return Err(NumericError::ScaleOutOfRange(scale));
    }

    let mut rounded = value.round_dp_with_strategy(scale, mode.strategy());
    rounded.rescale(scale);

    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    Ok(rounded)
}
