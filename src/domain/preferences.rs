// ============================================================================
// Format Preferences
// Date and number display patterns chosen from the known lists
// ============================================================================

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A selectable date pattern and its chrono rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    /// Pattern as shown to the user
    pub pattern: &'static str,
    /// Equivalent chrono format string
    pub chrono_format: &'static str,
}

/// Date patterns offered for selection.
pub const DATE_PATTERNS: &[DatePattern] = &[
    DatePattern { pattern: "MM/dd/yyyy", chrono_format: "%m/%d/%Y" },
    DatePattern { pattern: "M/d/yy", chrono_format: "%-m/%-d/%y" },
    DatePattern { pattern: "dd/MM/yyyy", chrono_format: "%d/%m/%Y" },
    DatePattern { pattern: "dd.MM.yyyy", chrono_format: "%d.%m.%Y" },
    DatePattern { pattern: "dd-MM-yyyy", chrono_format: "%d-%m-%Y" },
    DatePattern { pattern: "yyyy-MM-dd", chrono_format: "%Y-%m-%d" },
    DatePattern { pattern: "yyyy/MM/dd", chrono_format: "%Y/%m/%d" },
];

/// Number patterns with currency symbol, used for full amounts.
pub const FULL_NUMBER_PATTERNS: &[&str] = &[
    "¤#,##0.00;(¤#,##0.00)",
    "¤#,##0.00;-¤#,##0.00",
    "¤ #,##0.00;¤ -#,##0.00",
    "#,##0.00 ¤;-#,##0.00 ¤",
];

/// Number patterns without currency symbol, used in compact columns.
pub const SHORT_NUMBER_PATTERNS: &[&str] = &[
    "#,##0.00;(#,##0.00)",
    "#,##0.00;-#,##0.00",
    "#,##0.00",
];

/// Currently selected display formats.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatPreferences {
    date_pattern: String,
    full_number_pattern: String,
    short_number_pattern: String,
}

impl Default for FormatPreferences {
    fn default() -> Self {
        Self {
            date_pattern: DATE_PATTERNS[0].pattern.to_string(),
            full_number_pattern: FULL_NUMBER_PATTERNS[0].to_string(),
            short_number_pattern: SHORT_NUMBER_PATTERNS[0].to_string(),
        }
    }
}

/// Non-blank trimmed value, if any.
fn selection(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl FormatPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn known_date_patterns() -> impl Iterator<Item = &'static str> {
        DATE_PATTERNS.iter().map(|p| p.pattern)
    }

    pub fn known_full_number_patterns() -> &'static [&'static str] {
        FULL_NUMBER_PATTERNS
    }

    pub fn known_short_number_patterns() -> &'static [&'static str] {
        SHORT_NUMBER_PATTERNS
    }

    pub fn date_pattern(&self) -> &str {
        &self.date_pattern
    }

    pub fn full_number_pattern(&self) -> &str {
        &self.full_number_pattern
    }

    pub fn short_number_pattern(&self) -> &str {
        &self.short_number_pattern
    }

    /// Select a date pattern. Blank and unknown patterns are ignored.
    ///
    /// Returns `true` if the selection changed.
    pub fn set_date_pattern(&mut self, pattern: Option<&str>) -> bool {
        let Some(pattern) = selection(pattern) else {
            return false;
        };
        if !DATE_PATTERNS.iter().any(|p| p.pattern == pattern) {
            tracing::warn!(pattern, "Ignoring unknown date pattern");
            return false;
        }
        replace(&mut self.date_pattern, pattern)
    }

    /// Select the full number pattern. Blank values are ignored.
    pub fn set_full_number_pattern(&mut self, pattern: Option<&str>) -> bool {
        match selection(pattern) {
            Some(pattern) => replace(&mut self.full_number_pattern, pattern),
            None => false,
        }
    }

    /// Select the short number pattern. Blank values are ignored.
    pub fn set_short_number_pattern(&mut self, pattern: Option<&str>) -> bool {
        match selection(pattern) {
            Some(pattern) => replace(&mut self.short_number_pattern, pattern),
            None => false,
        }
    }

    /// Render a date with the selected pattern.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let chrono_format = DATE_PATTERNS
            .iter()
            .find(|p| p.pattern == self.date_pattern)
            .unwrap_or(&DATE_PATTERNS[0])
            .chrono_format;
        date.format(chrono_format).to_string()
    }
}

fn replace(slot: &mut String, value: &str) -> bool {
    if slot == value {
        return false;
    }
    tracing::debug!(old = %slot, new = value, "Format preference changed");
    *slot = value.to_string();
    true
}
