// ============================================================================
// Locale Separators
// Grouping/fraction characters and the keystroke alphabet they imply
// ============================================================================

use smallvec::SmallVec;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arithmetic characters accepted in addition to digits and separators.
pub const MATH_OPERATORS: &str = "()+*/";

/// Environment variables consulted for the numeric locale, in order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

const NO_BREAK_SPACE: char = '\u{a0}';

// ============================================================================
// Separators
// ============================================================================

/// Grouping and fractional separators of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Separators {
    /// Digit-group separator (thousands)
    pub group: char,
    /// Separator between integer and fractional digits
    pub fraction: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            group: ',',
            fraction: '.',
        }
    }
}

impl Separators {
    /// Create separators exactly as given.
    pub const fn new(group: char, fraction: char) -> Self {
        Self { group, fraction }
    }

    /// Apply the numeric-keypad fix: when the fraction mark is `,` the
    /// grouping mark is forced to `.` so the keypad decimal key stays usable.
    pub fn normalized(self) -> Self {
        if self.group != '.' && self.fraction == ',' {
            Self {
                group: '.',
                fraction: self.fraction,
            }
        } else {
            self
        }
    }

    /// Resolve the separators of a locale tag and normalize them.
    ///
    /// Accepts BCP 47 style (`de-CH`) and POSIX style (`de_CH.UTF-8@euro`)
    /// tags. Unknown languages, `C` and `POSIX` resolve to `,` and `.`.
    pub fn for_locale(tag: &str) -> Self {
        let (language, region) = split_locale_tag(tag);

        let raw = match (language.as_str(), region.as_deref()) {
            ("de" | "it" | "rm", Some("CH" | "LI")) => Self::new('\'', '.'),
            ("fr", Some("CH")) => Self::new('\'', '.'),
            ("es", Some("MX" | "US" | "PR")) => Self::new(',', '.'),
            ("pt", _) => Self::new('.', ','),
            ("de" | "es" | "it" | "nl" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl", _) => {
                Self::new('.', ',')
            },
            (
                "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "no" | "nn" | "uk" | "hu"
                | "bg" | "lt" | "lv" | "et",
                _,
            ) => Self::new(NO_BREAK_SPACE, ','),
            _ => Self::default(),
        };

        raw.normalized()
    }

    /// Resolve from `LC_ALL`, `LC_NUMERIC` or `LANG`, first non-empty wins.
    pub fn from_env() -> Self {
        match locale_tag_from(|name| std::env::var(name).ok()) {
            Some(tag) => Self::for_locale(&tag),
            None => Self::default(),
        }
    }

    /// The set of characters a field accepts with these separators.
    pub fn allowed_chars(&self) -> AllowedChars {
        AllowedChars::new(*self)
    }
}

/// First non-empty locale variable reported by `lookup`.
pub fn locale_tag_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Split a tag into lowercase language and uppercase region.
fn split_locale_tag(tag: &str) -> (String, Option<String>) {
    // Strip encoding and modifier: "de_DE.UTF-8@euro" -> "de_DE"
    let base = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    let mut parts = base.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(|part| part.to_ascii_uppercase());

    (language, region)
}

// ============================================================================
// Process-Wide Separators
// ============================================================================

static PROCESS_SEPARATORS: OnceLock<Separators> = OnceLock::new();

/// Install the separators used by fields created without explicit ones.
///
/// Must happen before the first field is created. Returns the rejected
/// value if separators were already resolved.
pub fn install_process_separators(separators: Separators) -> Result<(), Separators> {
    PROCESS_SEPARATORS.set(separators.normalized())
}

/// Separators shared by the whole process, resolved from the environment on
/// first use unless installed earlier.
pub fn process_separators() -> Separators {
    *PROCESS_SEPARATORS.get_or_init(|| {
        let resolved = Separators::from_env();
        tracing::debug!(
            group = %resolved.group.escape_unicode(),
            fraction = %resolved.fraction,
            "Resolved process locale separators"
        );
        resolved
    })
}

// ============================================================================
// Allowed Characters
// ============================================================================

/// Characters a decimal field accepts: digits, `-`, both separators and
/// the arithmetic operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedChars {
    extra: SmallVec<[char; 8]>,
}

impl AllowedChars {
    pub fn new(separators: Separators) -> Self {
        let mut extra: SmallVec<[char; 8]> = SmallVec::new();
        extra.push('-');
        extra.push(separators.group);
        extra.push(separators.fraction);
        extra.extend(MATH_OPERATORS.chars());
        Self { extra }
    }

    /// Check a single character.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_digit() || self.extra.contains(&c)
    }

    /// Check that every character of `text` is allowed.
    pub fn accepts(&self, text: &str) -> bool {
        text.chars().all(|c| self.contains(c))
    }
}
