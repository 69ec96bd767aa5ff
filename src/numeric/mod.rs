// ============================================================================
// Numeric Module
// Decimal parsing, rounding and display formatting for entry fields
// ============================================================================
//
// This module provides:
// - RoundingMode: rounding policy applied whenever a value is scaled
// - parse_plain_decimal: strict literal parsing (no grouping, '.' fraction)
// - DisplayFormat: locale-aware rendering without grouping
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Values handed out are always rounded to the configured scale

mod errors;
mod format;
mod parse;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use format::DisplayFormat;
pub use parse::parse_plain_decimal;
pub use rounding::{round_to_scale, RoundingMode, MAX_SCALE};
