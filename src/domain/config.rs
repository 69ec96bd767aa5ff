// ============================================================================
// Field Configuration
// Scale, display and rounding behaviour of a decimal entry field
// ============================================================================

use crate::numeric::{RoundingMode, MAX_SCALE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale used when nothing else is configured.
pub const DEFAULT_SCALE: u32 = 2;

/// Configuration for a decimal entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Maximum number of fractional digits kept and displayed
    pub scale: u32,

    /// Minimum number of fractional digits displayed
    pub min_scale: u32,

    /// Show an empty field instead of a zero value
    pub blank_when_zero: bool,

    /// Rounding applied when reducing a value to `scale`
    pub rounding: RoundingMode,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            min_scale: DEFAULT_SCALE,
            blank_when_zero: true,
            rounding: RoundingMode::HalfUp,
        }
    }
}

impl FieldConfig {
    /// Create a configuration with the given scale for both bounds
    pub fn new(scale: u32) -> Self {
        Self {
            scale,
            min_scale: scale,
            ..Self::default()
        }
    }

    /// Builder method: Set maximum scale
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder method: Set minimum displayed scale
    pub fn with_min_scale(mut self, min_scale: u32) -> Self {
        self.min_scale = min_scale;
        self
    }

    /// Builder method: Set blank-when-zero display
    pub fn with_blank_when_zero(mut self, blank: bool) -> Self {
        self.blank_when_zero = blank;
        self
    }

    /// Builder method: Set rounding policy
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Limit both scales to what a `Decimal` can carry
    pub fn clamped(mut self) -> Self {
        self.scale = self.scale.min(MAX_SCALE);
        self.min_scale = self.min_scale.min(MAX_SCALE);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.scale > MAX_SCALE {
            return Err(format!("Scale cannot exceed {}", MAX_SCALE));
        }

        if self.min_scale > self.scale {
            return Err("Minimum scale cannot exceed scale".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FieldConfig {
    /// Currency amount with the currency's minor-unit scale
    /// - Blank when zero
    /// - Half-up rounding
    pub fn currency(scale: u32) -> Self {
        Self::new(scale)
    }

    /// Security quantity
    /// - Up to 4 fractional digits, none forced
    /// - Zero is shown
    pub fn quantity() -> Self {
        Self::new(4).with_min_scale(0).with_blank_when_zero(false)
    }

    /// Exchange rate between two currencies
    /// - 6 fractional digits kept, 2 forced
    pub fn exchange_rate() -> Self {
        Self::new(6).with_min_scale(2)
    }

    /// Percentage entry
    /// - Up to 3 fractional digits, none forced
    pub fn percentage() -> Self {
        Self::new(3).with_min_scale(0)
    }
}
