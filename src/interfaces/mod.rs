// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod expression_evaluator;
mod field_listener;

pub use expression_evaluator::{Evaluation, EvaluationSource, ExpressionEvaluator};
pub use field_listener::{
    FieldEvent, FieldListener, LoggingListener, NoOpListener, RecordingListener,
};
