// ============================================================================
// Field Listener Interface
// Defines the contract for observing decimal field changes
// ============================================================================

use super::expression_evaluator::EvaluationSource;
use parking_lot::Mutex;
use rust_decimal::Decimal;

/// Events emitted by a decimal field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// An edit passed the filter and changed the text
    EditApplied { text: String },

    /// An edit was refused; the text is unchanged
    EditRejected { proposed: String },

    /// The bound value changed
    ValueChanged {
        old: Option<Decimal>,
        new: Option<Decimal>,
    },

    /// The text was evaluated into a value
    Evaluated {
        input: String,
        source: EvaluationSource,
        value: Decimal,
    },

    /// Scale bounds were reconfigured
    ScaleChanged { scale: u32, min_scale: u32 },
}

/// Listener trait for decimal field events
/// Implementations can handle logging, bindings to other models, etc.
pub trait FieldListener: Send + Sync {
    /// Handle a field event
    fn on_event(&self, event: &FieldEvent);
}

/// No-op listener for fields nobody observes
pub struct NoOpListener;

impl FieldListener for NoOpListener {
    fn on_event(&self, _event: &FieldEvent) {
        // Do nothing
    }
}

/// Logging listener
pub struct LoggingListener;

impl FieldListener for LoggingListener {
    fn on_event(&self, event: &FieldEvent) {
        tracing::debug!("Decimal field event: {:?}", event);
    }
}

/// Listener that keeps every event, for assertions and replay
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<FieldEvent>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<FieldEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events
    pub fn take(&self) -> Vec<FieldEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl FieldListener for RecordingListener {
    fn on_event(&self, event: &FieldEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_listener() {
        let listener = NoOpListener;
        listener.on_event(&FieldEvent::EditApplied {
            text: "1".to_string(),
        });
        // Should not panic
    }

    #[test]
    fn test_recording_listener() {
        let listener = RecordingListener::new();
        listener.on_event(&FieldEvent::EditRejected {
            proposed: "1a".to_string(),
        });
        listener.on_event(&FieldEvent::ScaleChanged {
            scale: 4,
            min_scale: 2,
        });

        assert_eq!(listener.events().len(), 2);
        assert_eq!(listener.take().len(), 2);
        assert!(listener.events().is_empty());
    }
}
