//! # Cleanse Validator
//!
//! Streaming validation engine for delimited-text records. This crate applies
//! a `cleanse_core::RuleSet` to raw input lines, classifying each record as
//! valid (passed through unchanged) or invalid with a single attributed
//! rejection reason, and accumulating mergeable quality counters per
//! partition:
//!
//! - Record parsing (delimiter split, empty trailing fields preserved)
//! - Rule evaluation in declared order with first-failure attribution
//! - Streaming partition runs over any `BufRead`, order preserved
//!
//! ## Example
//!
//! ```rust
//! use cleanse_core::{FieldRule, RuleSetBuilder};
//! use cleanse_validator::{run_partition, RecordValidator};
//! use std::io::Cursor;
//!
//! let rules = RuleSetBuilder::new("orders")
//!     .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
//!     .build();
//!
//! let validator = RecordValidator::new(rules).unwrap();
//! let mut cleaned = Vec::new();
//! let report = run_partition(&validator, Cursor::new("A1,x\n,y\n"), &mut cleaned).unwrap();
//!
//! assert_eq!(report.total(), 2);
//! assert_eq!(report.valid(), 1);
//! ```

mod engine;
mod partition;
mod record;
mod rules;

pub use engine::*;
pub use partition::*;
pub use record::*;
pub use rules::*;
