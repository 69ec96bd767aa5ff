// ============================================================================
// Decimal Field Factory
// Creates entry fields with validated configuration
// ============================================================================

use crate::domain::{process_separators, FieldConfig, Separators};
use crate::engine::DecimalField;
use crate::interfaces::{ExpressionEvaluator, FieldListener};
use crate::numeric::RoundingMode;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a decimal field from configuration
///
/// # Arguments
/// * `config` - Field configuration
/// * `separators` - Locale separators to use
/// * `listener` - Listener for field events
///
/// # Returns
/// * `Result<DecimalField, String>` - Configured field or error
///
/// # Example
/// ```
/// use decimal_entry::prelude::*;
/// use decimal_entry::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = FieldConfig::exchange_rate();
/// let field = create_from_config(config, Separators::default(), Arc::new(NoOpListener)).unwrap();
/// assert_eq!(field.config().scale, 6);
/// ```
pub fn create_from_config(
    config: FieldConfig,
    separators: Separators,
    listener: Arc<dyn FieldListener>,
) -> Result<DecimalField, String> {
    // Validate configuration first
    config.validate()?;

    Ok(DecimalField::with_separators(config, separators).with_listener(listener))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating decimal fields with fluent API
///
/// # Example
/// ```
/// use decimal_entry::prelude::*;
/// use std::sync::Arc;
///
/// let field = DecimalFieldBuilder::new()
///     .scale(4)
///     .min_scale(0)
///     .locale("de-DE")
///     .build(Arc::new(NoOpListener))
///     .unwrap();
///
/// assert_eq!(field.separators().fraction, ',');
/// ```
pub struct DecimalFieldBuilder {
    config: FieldConfig,
    separators: Option<Separators>,
    expression: Option<Arc<dyn ExpressionEvaluator>>,
}

impl Default for DecimalFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalFieldBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            separators: None,
            expression: None,
        }
    }

    // ========================================================================
    // Scale and Display Configuration
    // ========================================================================

    /// Set maximum scale
    pub fn scale(mut self, scale: u32) -> Self {
        self.config.scale = scale;
        self
    }

    /// Set minimum displayed scale
    pub fn min_scale(mut self, min_scale: u32) -> Self {
        self.config.min_scale = min_scale;
        self
    }

    /// Show zero values as an empty field
    pub fn blank_when_zero(mut self, blank: bool) -> Self {
        self.config.blank_when_zero = blank;
        self
    }

    /// Set rounding policy
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.config.rounding = rounding;
        self
    }

    // ========================================================================
    // Locale and Evaluation
    // ========================================================================

    /// Use explicit separators instead of the process-wide ones
    pub fn separators(mut self, separators: Separators) -> Self {
        self.separators = Some(separators);
        self
    }

    /// Use the separators of a locale tag
    pub fn locale(mut self, tag: &str) -> Self {
        self.separators = Some(Separators::for_locale(tag));
        self
    }

    /// Replace the arithmetic fallback
    pub fn expression_evaluator(mut self, expression: Arc<dyn ExpressionEvaluator>) -> Self {
        self.expression = Some(expression);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Currency amount preset
    pub fn currency(scale: u32) -> Self {
        Self {
            config: FieldConfig::currency(scale),
            ..Self::new()
        }
    }

    /// Security quantity preset
    pub fn quantity() -> Self {
        Self {
            config: FieldConfig::quantity(),
            ..Self::new()
        }
    }

    /// Exchange rate preset
    pub fn exchange_rate() -> Self {
        Self {
            config: FieldConfig::exchange_rate(),
            ..Self::new()
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the decimal field
    pub fn build(self, listener: Arc<dyn FieldListener>) -> Result<DecimalField, String> {
        let separators = self.separators.unwrap_or_else(process_separators);
        let field = create_from_config(self.config, separators, listener)?;

        Ok(match self.expression {
            Some(expression) => field.with_expression_evaluator(expression),
            None => field,
        })
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FieldConfig {
        &self.config
    }
}
