//! Validation outcomes and the mergeable quality report.
//!
//! The report is an explicit value owned by the caller: one per partition,
//! updated once per record, merged single-threaded at job end. There is no
//! shared mutable state and no ambient counter registry.

use std::collections::BTreeMap;
use std::fmt;

/// Why a record was rejected.
///
/// The set of reasons is closed per rule set: the distinguished
/// `TooFewFields` plus one label per declared rule. Exactly one reason is
/// ever attributed per invalid record: the earliest failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RejectReason {
    /// The record has fewer fields than the rule set requires
    TooFewFields,
    /// A field rule failed; carries the rule's reason label
    Rule(String),
}

impl RejectReason {
    /// Label used for `TooFewFields` in reports; reserved for rule labels.
    pub const TOO_FEW_FIELDS_LABEL: &'static str = "too_few_fields";

    /// The report label for this reason.
    pub fn label(&self) -> &str {
        match self {
            RejectReason::TooFewFields => Self::TOO_FEW_FIELDS_LABEL,
            RejectReason::Rule(label) => label,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every rule passed; the original trimmed line is emitted verbatim
    Valid,
    /// The first failing rule's reason
    Invalid(RejectReason),
    /// Blank line under `BlankLinePolicy::Skip`; invisible to the report
    Skipped,
}

/// Mergeable counter set for one partition (or a whole job after merging).
///
/// Counters only increase, and `total == valid + sum(reject counts)` holds
/// after any sequence of operations. `merge` is associative and commutative,
/// so per-partition reports can be reduced in any order with identical
/// results.
///
/// # Example
///
/// ```rust
/// use cleanse_core::{QualityReport, RejectReason};
///
/// let mut a = QualityReport::new();
/// a.record_total();
/// a.record_valid();
///
/// let mut b = QualityReport::new();
/// b.record_total();
/// b.record_invalid(RejectReason::TooFewFields);
///
/// let merged = a.merge(b);
/// assert_eq!(merged.total(), 2);
/// assert_eq!(merged.valid(), 1);
/// assert_eq!(merged.valid_rate(), 50.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityReport {
    total: u64,
    valid: u64,
    rejects: BTreeMap<RejectReason, u64>,
}

impl QualityReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one record as seen.
    pub fn record_total(&mut self) {
        self.total += 1;
    }

    /// Counts one record as valid.
    pub fn record_valid(&mut self) {
        self.valid += 1;
    }

    /// Counts one record as rejected for `reason`.
    pub fn record_invalid(&mut self, reason: RejectReason) {
        *self.rejects.entry(reason).or_insert(0) += 1;
    }

    /// Applies a classification outcome to the counters.
    ///
    /// `Skipped` lines leave the report untouched.
    pub fn observe(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Valid => {
                self.record_total();
                self.record_valid();
            }
            Outcome::Invalid(reason) => {
                self.record_total();
                self.record_invalid(reason.clone());
            }
            Outcome::Skipped => {}
        }
    }

    /// Total records seen.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Records that passed every rule.
    pub fn valid(&self) -> u64 {
        self.valid
    }

    /// Records rejected by any rule.
    pub fn invalid(&self) -> u64 {
        self.total - self.valid
    }

    /// Count for a specific rejection reason.
    pub fn reject_count(&self, reason: &RejectReason) -> u64 {
        self.rejects.get(reason).copied().unwrap_or_default()
    }

    /// Iterates over reasons with non-zero counts.
    pub fn rejects(&self) -> impl Iterator<Item = (&RejectReason, u64)> {
        self.rejects
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(reason, &count)| (reason, count))
    }

    /// Percentage of valid records, `0.0` when nothing was seen.
    pub fn valid_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.valid as f64 / self.total as f64 * 100.0
        }
    }

    /// Combines two reports field-wise.
    pub fn merge(mut self, other: QualityReport) -> QualityReport {
        self.total += other.total;
        self.valid += other.valid;
        for (reason, count) in other.rejects {
            *self.rejects.entry(reason).or_insert(0) += count;
        }
        self
    }

    /// Reduces any number of reports into one.
    pub fn merge_all(reports: impl IntoIterator<Item = QualityReport>) -> QualityReport {
        reports
            .into_iter()
            .fold(QualityReport::new(), QualityReport::merge)
    }

    /// Whether `total == valid + sum(reject counts)` holds.
    pub fn is_consistent(&self) -> bool {
        self.total == self.valid + self.rejects.values().sum::<u64>()
    }
}
