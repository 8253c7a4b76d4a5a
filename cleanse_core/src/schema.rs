//! Rule set types and structures.
//!
//! This module contains the declarative field schema: an ordered list of
//! per-column rules plus the line-level policies (delimiter, blank lines,
//! minimum field count). The schema is pure data: swapping one rule set for
//! another never touches the validation engine.

use crate::{RejectReason, RuleKind, SchemaError};
use serde::{Deserialize, Serialize};

/// A single column-level rule with an attached rejection reason.
///
/// `index` is the zero-based column the rule inspects; `reason` is the label
/// attributed to records that fail this rule first. Indices need not be
/// contiguous, but the highest index determines the minimum number of fields
/// a record must have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Zero-based column index this rule inspects
    pub index: usize,

    /// Human-readable column name (reporting only)
    pub field: String,

    /// Rejection reason label attributed on failure
    pub reason: String,

    /// The predicate to apply
    #[serde(flatten)]
    pub kind: RuleKind,
}

impl FieldRule {
    /// Creates a rule with an explicit kind.
    pub fn new(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        kind: RuleKind,
    ) -> Self {
        Self {
            index,
            field: field.into(),
            reason: reason.into(),
            kind,
        }
    }

    /// Creates a non-empty rule.
    pub fn non_empty(index: usize, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(index, field, reason, RuleKind::NonEmpty)
    }

    /// Creates a substring-presence rule.
    pub fn contains(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        needle: impl Into<String>,
    ) -> Self {
        Self::new(
            index,
            field,
            reason,
            RuleKind::Contains {
                needle: needle.into(),
            },
        )
    }

    /// Creates an inclusive integer range rule.
    pub fn int_range(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        min: i64,
        max: i64,
    ) -> Self {
        Self::new(index, field, reason, RuleKind::IntRange { min, max })
    }

    /// Creates an inclusive float range rule. Either bound may be open-ended.
    pub fn float_range(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Self {
        Self::new(
            index,
            field,
            reason,
            RuleKind::FloatRange {
                min,
                max,
                exclusive_min: false,
            },
        )
    }

    /// Creates a strictly-greater-than float rule (open-ended maximum).
    pub fn float_gt(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        min: f64,
    ) -> Self {
        Self::new(
            index,
            field,
            reason,
            RuleKind::FloatRange {
                min: Some(min),
                max: None,
                exclusive_min: true,
            },
        )
    }

    /// Creates a maximum-length rule (untrimmed length, in characters).
    pub fn max_length(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        max: usize,
    ) -> Self {
        Self::new(index, field, reason, RuleKind::MaxLength { max })
    }

    /// Creates a regex-match rule.
    pub fn matches(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self::new(
            index,
            field,
            reason,
            RuleKind::Matches {
                pattern: pattern.into(),
            },
        )
    }
}

/// Policy for lines that are empty after trimming.
///
/// The upstream jobs silently skipped blank lines without counting them;
/// `Skip` reproduces that. `Count` makes blank lines visible: they count
/// toward the total and are classified as having too few fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankLinePolicy {
    /// Blank lines are invisible: not counted, not emitted
    #[default]
    Skip,
    /// Blank lines count toward the total and reject as `TooFewFields`
    Count,
}

/// An ordered, data-driven field schema for one job variant.
///
/// # Example
///
/// ```rust
/// use cleanse_core::{FieldRule, RuleSetBuilder};
///
/// let rules = RuleSetBuilder::new("orders")
///     .version("1.0.0")
///     .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
///     .rule(FieldRule::int_range(2, "quantity", "invalid_quantity", 1, 999))
///     .build();
///
/// assert_eq!(rules.required_fields(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Semantic version of the rule set (e.g. "1.0.0")
    pub version: String,

    /// Unique name identifying this rule set
    pub name: String,

    /// Human-readable description
    pub description: Option<String>,

    /// Field delimiter, one character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// What to do with lines that are empty after trimming
    #[serde(default)]
    pub blank_lines: BlankLinePolicy,

    /// Explicit minimum field count, if higher than the rules imply
    pub min_fields: Option<usize>,

    /// Ordered list of field rules
    pub rules: Vec<FieldRule>,
}

fn default_delimiter() -> char {
    ','
}

impl RuleSet {
    /// Minimum number of fields a record must have.
    ///
    /// The highest rule index plus one, or `min_fields` if that is larger.
    pub fn required_fields(&self) -> usize {
        let implied = self
            .rules
            .iter()
            .map(|r| r.index + 1)
            .max()
            .unwrap_or_default();
        implied.max(self.min_fields.unwrap_or_default())
    }

    /// Checks the rule set for structural problems.
    ///
    /// Duplicate rule indices, duplicate reason labels, a reason colliding
    /// with the reserved too-few-fields label, and empty rule lists are all
    /// configuration errors, caught before any data is read.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.rules.is_empty() {
            return Err(SchemaError::Empty(self.name.clone()));
        }

        let mut seen_indices = std::collections::HashSet::new();
        let mut seen_reasons = std::collections::HashSet::new();

        for rule in &self.rules {
            if !seen_indices.insert(rule.index) {
                return Err(SchemaError::DuplicateIndex {
                    name: self.name.clone(),
                    index: rule.index,
                });
            }
            if rule.reason == RejectReason::TOO_FEW_FIELDS_LABEL {
                return Err(SchemaError::ReservedReason(rule.reason.clone()));
            }
            if !seen_reasons.insert(rule.reason.as_str()) {
                return Err(SchemaError::DuplicateReason {
                    name: self.name.clone(),
                    reason: rule.reason.clone(),
                });
            }
        }

        Ok(())
    }
}
