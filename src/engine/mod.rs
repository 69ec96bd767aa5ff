// ============================================================================
// Engine Module
// Contains the field evaluation logic and the models built on it
// ============================================================================

mod arithmetic;
mod decimal_field;
mod evaluator;
mod exchange_pane;
mod return_of_capital;

pub mod factory;

pub use arithmetic::ArithmeticEvaluator;
pub use decimal_field::{DecimalField, EditOutcome, FieldState, KeyCode};
pub use evaluator::DecimalEvaluator;
pub use exchange_pane::ExchangePane;
pub use factory::{create_from_config, DecimalFieldBuilder};
pub use return_of_capital::{ReturnOfCapitalSlip, SlipError};
