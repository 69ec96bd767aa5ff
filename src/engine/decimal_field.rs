// ============================================================================
// Decimal Field
// Headless model of a text field that accepts decimals and arithmetic
// ============================================================================
//
// A host toolkit forwards its edit, key and focus events to the field and
// mirrors `text()` and `caret()` back onto the widget. Positions are
// character offsets, never byte offsets.
//
// State flow:
//     Idle --edit--> Editing --focus lost / Enter / commit--> Evaluated
//     Evaluated --edit--> Editing
//     any --set_decimal / clear--> Evaluated

use crate::domain::{process_separators, AllowedChars, FieldConfig, Separators};
use crate::engine::DecimalEvaluator;
use crate::interfaces::{ExpressionEvaluator, FieldEvent, FieldListener, NoOpListener};
use crate::numeric::{round_to_scale, DisplayFormat};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Keys the field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Decimal key of the numeric keypad
    Decimal,
    /// Enter / Return
    Enter,
    /// Anything else; text arrives through `replace_text`
    Other,
}

/// Editing state of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No user edit since creation
    Idle,
    /// Text changed since the last evaluation
    Editing,
    /// Text reflects the bound value
    Evaluated,
}

/// Whether an edit reached the text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    Rejected,
}

impl EditOutcome {
    pub fn is_applied(self) -> bool {
        self == EditOutcome::Applied
    }
}

/// Byte offset of the `index`-th character, or the end of the string.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(offset, _)| offset)
}

/// Decimal entry field
pub struct DecimalField {
    config: FieldConfig,
    evaluator: DecimalEvaluator,
    allowed: AllowedChars,
    format: DisplayFormat,
    listener: Arc<dyn FieldListener>,

    text: String,
    value: Option<Decimal>,
    caret: usize,
    selection: (usize, usize),

    /// Keypad decimal pressed; next edit inserts the fraction mark
    force_fraction: bool,
    focused: bool,
    state: FieldState,
}

impl DecimalField {
    /// Create a field using the process-wide separators
    pub fn new(config: FieldConfig) -> Self {
        Self::with_separators(config, process_separators())
    }

    /// Create a field with explicit separators
    pub fn with_separators(config: FieldConfig, separators: Separators) -> Self {
        let config = config.clamped();
        let separators = separators.normalized();
        let mut field = Self {
            config,
            evaluator: DecimalEvaluator::new(separators),
            allowed: separators.allowed_chars(),
            format: Self::display_format(&config, separators),
            listener: Arc::new(NoOpListener),
            text: String::new(),
            value: None,
            caret: 0,
            selection: (0, 0),
            force_fraction: false,
            focused: false,
            state: FieldState::Idle,
        };

        // An untouched field is bound to zero
        field.store(Decimal::ZERO);
        field
    }

    /// Replace the arithmetic fallback
    pub fn with_expression_evaluator(mut self, expression: Arc<dyn ExpressionEvaluator>) -> Self {
        self.evaluator =
            DecimalEvaluator::with_expression_evaluator(self.evaluator.separators(), expression);
        self
    }

    /// Attach a listener for field events
    pub fn with_listener(mut self, listener: Arc<dyn FieldListener>) -> Self {
        self.listener = listener;
        self
    }

    fn display_format(config: &FieldConfig, separators: Separators) -> DisplayFormat {
        DisplayFormat::new(
            separators.fraction,
            config.min_scale,
            config.scale,
            config.rounding,
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position in characters
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Selected character range, `start <= end`
    pub fn selection(&self) -> (usize, usize) {
        self.selection
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn separators(&self) -> Separators {
        self.evaluator.separators()
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// True if the text buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The bound value, already rounded to the field scale
    pub fn decimal(&self) -> Option<Decimal> {
        self.value
    }

    /// Evaluate the current text without committing it.
    ///
    /// Empty or unevaluable text yields zero.
    pub fn current_value(&self) -> Decimal {
        self.evaluator.evaluate(&self.text, &self.config).value
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn emit(&self, event: FieldEvent) {
        self.listener.on_event(&event);
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Replace the characters in `start..end` with `text`.
    ///
    /// The whole resulting content must consist of allowed characters,
    /// otherwise the edit is rejected and the content is unchanged. After a
    /// keypad decimal key press the next non-empty insertion is replaced by
    /// the locale fraction mark without filtering.
    pub fn replace_text(&mut self, start: usize, end: usize, text: &str) -> EditOutcome {
        if !self.range_in_bounds(start, end, text) {
            return EditOutcome::Rejected;
        }

        // Keypad fraction bypasses the filter once; removals leave it raised
        let keypad_fraction = !text.is_empty() && std::mem::take(&mut self.force_fraction);
        let fraction;
        let inserted = if keypad_fraction {
            fraction = self.separators().fraction.to_string();
            fraction.as_str()
        } else {
            text
        };

        let proposed = self.spliced(start, end, inserted);
        if !keypad_fraction && !self.allowed.accepts(&proposed) {
            tracing::trace!(proposed = %proposed, "Rejected keystroke");
            self.emit(FieldEvent::EditRejected { proposed });
            return EditOutcome::Rejected;
        }

        self.apply(proposed, start + inserted.chars().count());
        EditOutcome::Applied
    }

    /// Delete the characters in `start..end`.
    ///
    /// Removals skip the character filter and keep a pending keypad fraction.
    pub fn delete_text(&mut self, start: usize, end: usize) -> EditOutcome {
        if !self.range_in_bounds(start, end, "") {
            return EditOutcome::Rejected;
        }

        let remaining = self.spliced(start, end, "");
        self.apply(remaining, start);
        EditOutcome::Applied
    }

    fn range_in_bounds(&self, start: usize, end: usize, text: &str) -> bool {
        let len = self.char_len();
        if start > end || end > len {
            tracing::warn!(start, end, len, "Edit range outside field text");
            self.emit(FieldEvent::EditRejected {
                proposed: text.to_string(),
            });
            return false;
        }
        true
    }

    /// Field text with `start..end` replaced by `inserted`
    fn spliced(&self, start: usize, end: usize, inserted: &str) -> String {
        let start_byte = byte_offset(&self.text, start);
        let end_byte = byte_offset(&self.text, end);
        let mut proposed = String::with_capacity(self.text.len() + inserted.len());
        proposed.push_str(&self.text[..start_byte]);
        proposed.push_str(inserted);
        proposed.push_str(&self.text[end_byte..]);
        proposed
    }

    fn apply(&mut self, text: String, caret: usize) {
        self.text = text;
        self.caret = caret;
        self.selection = (caret, caret);
        self.state = FieldState::Editing;
        self.emit(FieldEvent::EditApplied {
            text: self.text.clone(),
        });
    }

    /// Select a character range; bounds are ordered and clamped to the text
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = (start.min(end).min(len), start.max(end).min(len));
        self.selection = (start, end);
        self.caret = end;
    }

    /// Move the caret and collapse the selection
    pub fn position_caret(&mut self, position: usize) {
        let position = position.min(self.char_len());
        self.caret = position;
        self.selection = (position, position);
    }

    /// Replace the current selection (typing or paste)
    pub fn replace_selection(&mut self, text: &str) -> EditOutcome {
        let (start, end) = self.selection;
        self.replace_text(start, end, text)
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// React to a key press
    pub fn key_pressed(&mut self, key: KeyCode) {
        match key {
            KeyCode::Decimal => self.force_fraction = true,
            KeyCode::Enter => {
                self.commit();
                self.position_caret(self.char_len());
            },
            KeyCode::Other => {},
        }
    }

    /// React to a focus change; losing focus evaluates the text
    pub fn focus_changed(&mut self, focused: bool) {
        let lost = self.focused && !focused;
        self.focused = focused;
        if lost {
            self.commit();
        }
    }

    /// Evaluate the text and bind the result.
    ///
    /// Returns the new bound value.
    pub fn commit(&mut self) -> Decimal {
        let evaluation = self.evaluator.evaluate(&self.text, &self.config);
        self.emit(FieldEvent::Evaluated {
            input: self.text.clone(),
            source: evaluation.source,
            value: evaluation.value,
        });

        self.store(evaluation.value);
        self.state = FieldState::Evaluated;
        evaluation.value
    }

    // ========================================================================
    // Value Binding
    // ========================================================================

    /// Bind a value; it is rounded to the field scale and rendered
    pub fn set_decimal(&mut self, value: Decimal) {
        self.store(value);
        self.state = FieldState::Evaluated;
    }

    /// Unbind the value and clear the text
    pub fn clear(&mut self) {
        let old = self.value.take();
        self.render();
        self.state = FieldState::Evaluated;
        if old.is_some() {
            self.emit(FieldEvent::ValueChanged { old, new: None });
        }
    }

    fn store(&mut self, value: Decimal) {
        let rounded = match round_to_scale(value, self.config.scale, self.config.rounding) {
            Ok(rounded) => rounded,
            Err(err) => {
                tracing::warn!(scale = self.config.scale, error = %err, "Value not stored");
                return;
            },
        };

        let old = self.value.replace(rounded);
        self.render();

        if old != Some(rounded) {
            self.emit(FieldEvent::ValueChanged {
                old,
                new: Some(rounded),
            });
        }
    }

    fn render(&mut self) {
        self.text = match self.value {
            None => String::new(),
            Some(value) if value.is_zero() && self.config.blank_when_zero => String::new(),
            Some(value) => self.format.format(value),
        };
        let len = self.char_len();
        self.caret = self.caret.min(len);
        self.selection = (self.selection.0.min(len), self.selection.1.min(len));
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Change the maximum scale and re-evaluate the text.
    ///
    /// Scales above [`MAX_SCALE`](crate::numeric::MAX_SCALE) are clamped.
    pub fn set_scale(&mut self, scale: u32) {
        self.config = self.config.with_scale(scale).clamped();
        self.reconfigure();
    }

    /// Change the minimum displayed scale and re-evaluate the text
    pub fn set_min_scale(&mut self, min_scale: u32) {
        self.config = self.config.with_min_scale(min_scale).clamped();
        self.reconfigure();
    }

    /// Toggle blank display of zero values
    pub fn set_blank_when_zero(&mut self, blank: bool) {
        self.config.blank_when_zero = blank;
        self.render();
    }

    fn reconfigure(&mut self) {
        self.format = Self::display_format(&self.config, self.separators());
        self.emit(FieldEvent::ScaleChanged {
            scale: self.config.scale,
            min_scale: self.config.min_scale,
        });
        self.commit();
    }
}

impl std::fmt::Debug for DecimalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecimalField")
            .field("text", &self.text)
            .field("value", &self.value)
            .field("state", &self.state)
            .field("config", &self.config)
            .finish()
    }
}
