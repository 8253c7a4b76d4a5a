//! Rule predicate evaluation.
//!
//! One evaluator per rule set. Regex patterns are compiled once at
//! construction, so a malformed pattern is a configuration error rather than
//! a per-record surprise.

use crate::Record;
use cleanse_core::{RuleKind, RuleSet, SchemaError};
use regex::Regex;
use std::collections::HashMap;

/// Evaluates rule predicates against record fields.
pub struct RuleEvaluator {
    /// Compiled patterns, keyed by rule position in the rule set
    regexes: HashMap<usize, Regex>,
}

impl RuleEvaluator {
    /// Compiles all `Matches` patterns in a rule set.
    pub fn compile(rule_set: &RuleSet) -> Result<Self, SchemaError> {
        let mut regexes = HashMap::new();

        for (pos, rule) in rule_set.rules.iter().enumerate() {
            if let RuleKind::Matches { pattern } = &rule.kind {
                let regex = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
                    field: rule.field.clone(),
                    error: e.to_string(),
                })?;
                regexes.insert(pos, regex);
            }
        }

        Ok(Self { regexes })
    }

    /// Whether the rule at `pos` in the rule set passes for this record.
    ///
    /// The caller has already checked the record's field count, so the
    /// rule's index is in range; a missing field is treated as empty.
    pub fn passes(&self, pos: usize, kind: &RuleKind, index: usize, record: &Record) -> bool {
        let value = record.field(index).unwrap_or("");

        match kind {
            RuleKind::NonEmpty => !value.trim().is_empty(),
            RuleKind::Contains { needle } => {
                let trimmed = value.trim();
                !trimmed.is_empty() && trimmed.contains(needle.as_str())
            }
            RuleKind::IntRange { min, max } => match value.trim().parse::<i64>() {
                Ok(n) => n >= *min && n <= *max,
                Err(_) => false,
            },
            RuleKind::FloatRange {
                min,
                max,
                exclusive_min,
            } => match value.trim().parse::<f64>() {
                Ok(v) if v.is_nan() => false,
                Ok(v) => {
                    let above_min = match min {
                        Some(m) if *exclusive_min => v > *m,
                        Some(m) => v >= *m,
                        None => true,
                    };
                    let below_max = match max {
                        Some(m) => v <= *m,
                        None => true,
                    };
                    above_min && below_max
                }
                Err(_) => false,
            },
            RuleKind::MaxLength { max } => value.chars().count() <= *max,
            RuleKind::Matches { .. } => self
                .regexes
                .get(&pos)
                .is_some_and(|regex| regex.is_match(value.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanse_core::{FieldRule, RuleSetBuilder};

    fn passes(kind: RuleKind, field: &str) -> bool {
        let evaluator = RuleEvaluator {
            regexes: HashMap::new(),
        };
        let record = Record::parse(field, '\u{1}');
        evaluator.passes(0, &kind, 0, &record)
    }

    #[test]
    fn non_empty_trims_before_checking() {
        assert!(passes(RuleKind::NonEmpty, "x"));
        assert!(passes(RuleKind::NonEmpty, " x "));
        assert!(!passes(RuleKind::NonEmpty, ""));
        assert!(!passes(RuleKind::NonEmpty, "   "));
    }

    #[test]
    fn contains_fails_on_empty_or_missing_needle() {
        let at = RuleKind::Contains {
            needle: "@".to_string(),
        };
        assert!(passes(at.clone(), "jane@x.com"));
        assert!(passes(at.clone(), " jane@x.com "));
        assert!(!passes(at.clone(), "not-an-email"));
        assert!(!passes(at, "   "));
    }

    #[test]
    fn int_range_boundaries_are_inclusive() {
        let age = RuleKind::IntRange { min: 1, max: 120 };
        assert!(passes(age.clone(), "1"));
        assert!(passes(age.clone(), "120"));
        assert!(passes(age.clone(), " 30 "));
        assert!(!passes(age.clone(), "0"));
        assert!(!passes(age, "121"));
    }

    #[test]
    fn int_range_rejects_decorated_numbers() {
        let age = RuleKind::IntRange { min: 1, max: 120 };
        assert!(!passes(age.clone(), "30yo"));
        assert!(!passes(age.clone(), "3.5"));
        assert!(!passes(age, ""));
    }

    #[test]
    fn float_exclusive_min_boundary() {
        let amount = RuleKind::FloatRange {
            min: Some(0.0),
            max: None,
            exclusive_min: true,
        };
        assert!(passes(amount.clone(), "0.01"));
        assert!(!passes(amount.clone(), "0"));
        assert!(!passes(amount.clone(), "-1"));
        assert!(!passes(amount, "free"));
    }

    #[test]
    fn float_inclusive_range_boundaries() {
        let rating = RuleKind::FloatRange {
            min: Some(0.0),
            max: Some(5.0),
            exclusive_min: false,
        };
        assert!(passes(rating.clone(), "0"));
        assert!(passes(rating.clone(), "5"));
        assert!(passes(rating.clone(), "4.5"));
        assert!(!passes(rating.clone(), "-0.01"));
        assert!(!passes(rating, "5.01"));
    }

    #[test]
    fn float_rejects_nan_and_out_of_range_infinity() {
        let rating = RuleKind::FloatRange {
            min: Some(0.0),
            max: Some(5.0),
            exclusive_min: false,
        };
        assert!(!passes(rating.clone(), "NaN"));
        assert!(!passes(rating, "inf"));

        // Scientific notation parses and is range-checked as usual
        let amount = RuleKind::FloatRange {
            min: Some(0.0),
            max: None,
            exclusive_min: true,
        };
        assert!(passes(amount, "1e2"));
    }

    #[test]
    fn max_length_counts_untrimmed_characters() {
        let feedback = RuleKind::MaxLength { max: 4 };
        assert!(passes(feedback.clone(), "abcd"));
        assert!(!passes(feedback.clone(), "abcde"));
        // Surrounding whitespace counts
        assert!(!passes(feedback.clone(), " abcd"));
        // Empty is fine; the length rule does not imply presence
        assert!(passes(feedback, ""));
    }

    #[test]
    fn matches_uses_precompiled_pattern() {
        let rules = RuleSetBuilder::new("zip_check")
            .rule(FieldRule::matches(0, "zip", "invalid_zip", "^[0-9]{5}$"))
            .build();
        let evaluator = RuleEvaluator::compile(&rules).expect("pattern compiles");

        let kind = &rules.rules[0].kind;
        assert!(evaluator.passes(0, kind, 0, &Record::parse("00001", ',')));
        assert!(!evaluator.passes(0, kind, 0, &Record::parse("ab001", ',')));
    }

    #[test]
    fn compile_rejects_invalid_pattern() {
        let rules = RuleSetBuilder::new("broken")
            .rule(FieldRule::matches(0, "zip", "invalid_zip", "[unclosed"))
            .build();

        assert!(matches!(
            RuleEvaluator::compile(&rules),
            Err(SchemaError::InvalidPattern { .. })
        ));
    }
}
