//! Rule predicate kinds.
//!
//! This module defines the closed set of per-field predicates a rule set can
//! declare. Each kind inspects exactly one field of a record; the engine in
//! `cleanse_validator` evaluates them in declared order and stops at the
//! first failure.

use serde::{Deserialize, Serialize};

/// The predicate applied by a single field rule.
///
/// Numeric kinds parse the *trimmed* field with Rust's `str::parse`, so any
/// leading or trailing non-numeric characters make the parse fail. Integer
/// parsing accepts plain decimal digits only; float parsing additionally
/// accepts scientific notation and infinities, which then face the range
/// check as usual. `NaN` never satisfies a range. A parse failure and an
/// out-of-range value are reported under the same rejection reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleKind {
    /// Fails if the trimmed field is empty.
    NonEmpty,

    /// Fails if the trimmed field is empty or does not contain `needle`.
    Contains {
        /// Substring that must be present
        needle: String,
    },

    /// Fails unless the field parses as an integer within `[min, max]`.
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Fails unless the field parses as a float within the given bounds.
    ///
    /// Either bound may be omitted for an open-ended range. The minimum is
    /// inclusive unless `exclusive_min` is set (e.g. "amount > 0" is
    /// `min: 0.0, exclusive_min: true`). The maximum is always inclusive.
    FloatRange {
        /// Lower bound, open-ended if absent
        #[serde(default)]
        min: Option<f64>,
        /// Upper bound (inclusive), open-ended if absent
        #[serde(default)]
        max: Option<f64>,
        /// Treat `min` as an exclusive bound
        #[serde(default)]
        exclusive_min: bool,
    },

    /// Fails if the *untrimmed* field is longer than `max` characters.
    MaxLength {
        /// Maximum length in characters
        max: usize,
    },

    /// Fails unless the trimmed field matches the regex pattern.
    Matches {
        /// Regular expression pattern
        pattern: String,
    },
}

impl RuleKind {
    /// Returns a short human-readable description of the predicate.
    pub fn describe(&self) -> String {
        match self {
            RuleKind::NonEmpty => "non-empty".to_string(),
            RuleKind::Contains { needle } => format!("contains '{}'", needle),
            RuleKind::IntRange { min, max } => format!("integer in [{}, {}]", min, max),
            RuleKind::FloatRange {
                min,
                max,
                exclusive_min,
            } => {
                let open = if *exclusive_min { "(" } else { "[" };
                let lo = min.map_or("-inf".to_string(), |m| m.to_string());
                let hi = max.map_or("+inf".to_string(), |m| m.to_string());
                format!("float in {}{}, {}]", open, lo, hi)
            }
            RuleKind::MaxLength { max } => format!("length <= {}", max),
            RuleKind::Matches { pattern } => format!("matches /{}/", pattern),
        }
    }
}
