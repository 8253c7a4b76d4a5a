//! Record classification engine.
//!
//! One `RecordValidator` per rule set. Classification is pure CPU work with
//! no side effects: malformed input is data, not a fault, so the engine only
//! ever classifies, it never errors on a record.

use crate::{Record, RuleEvaluator};
use cleanse_core::{BlankLinePolicy, Outcome, QualityReport, RejectReason, RuleSet, SchemaError};

/// Applies a rule set to raw input lines, one at a time.
///
/// Rules are evaluated in declared order and the first failure wins: a
/// record failing two rules is attributed only to the earlier one. A record
/// that passes every rule is emitted as the original trimmed line, so
/// unvalidated trailing columns are preserved verbatim.
///
/// # Example
///
/// ```rust
/// use cleanse_core::{FieldRule, Outcome, RuleSetBuilder};
/// use cleanse_validator::RecordValidator;
///
/// let rules = RuleSetBuilder::new("orders")
///     .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
///     .rule(FieldRule::contains(1, "email", "invalid_email", "@"))
///     .build();
///
/// let validator = RecordValidator::new(rules).unwrap();
/// assert_eq!(validator.classify("A1,jane@x.com"), Outcome::Valid);
/// ```
pub struct RecordValidator {
    rule_set: RuleSet,
    evaluator: RuleEvaluator,
    required_fields: usize,
}

impl RecordValidator {
    /// Builds a validator for a rule set.
    ///
    /// Fails if the rule set is structurally invalid or a `Matches` pattern
    /// does not compile.
    pub fn new(rule_set: RuleSet) -> Result<Self, SchemaError> {
        rule_set.validate()?;
        let evaluator = RuleEvaluator::compile(&rule_set)?;
        let required_fields = rule_set.required_fields();

        Ok(Self {
            rule_set,
            evaluator,
            required_fields,
        })
    }

    /// The active rule set.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Minimum field count a record must have.
    pub fn required_fields(&self) -> usize {
        self.required_fields
    }

    /// Classifies one raw input line.
    pub fn classify(&self, line: &str) -> Outcome {
        let line = line.trim();

        if line.is_empty() {
            return match self.rule_set.blank_lines {
                BlankLinePolicy::Skip => Outcome::Skipped,
                BlankLinePolicy::Count => Outcome::Invalid(RejectReason::TooFewFields),
            };
        }

        let record = Record::parse(line, self.rule_set.delimiter);
        if record.len() < self.required_fields {
            return Outcome::Invalid(RejectReason::TooFewFields);
        }

        for (pos, rule) in self.rule_set.rules.iter().enumerate() {
            if !self.evaluator.passes(pos, &rule.kind, rule.index, &record) {
                return Outcome::Invalid(RejectReason::Rule(rule.reason.clone()));
            }
        }

        Outcome::Valid
    }

    /// Classifies a line, updates the report, and emits valid records.
    ///
    /// The emitted text is the trimmed original line. Skipped blank lines
    /// touch neither the report nor the sink.
    pub fn process<F>(&self, line: &str, report: &mut QualityReport, mut emit: F) -> Outcome
    where
        F: FnMut(&str),
    {
        let outcome = self.classify(line);
        report.observe(&outcome);
        if outcome == Outcome::Valid {
            emit(line.trim());
        }
        outcome
    }
}
