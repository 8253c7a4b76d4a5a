//! # Cleanse Core
//!
//! Core data structures and types for the record cleansing engine.
//!
//! This crate provides the building blocks for declaring field schemas and
//! collecting quality statistics over large delimited-text datasets. A rule
//! set is an ordered, data-driven table of per-column predicates; the engine
//! in `cleanse_validator` evaluates it against each record and classifies the
//! record as valid or invalid with exactly one rejection reason.
//!
//! ## Key Concepts
//!
//! - **RuleSet**: the field schema, ordered column rules plus line policies
//! - **RuleKind**: the closed set of predicates a rule can apply
//! - **Outcome / RejectReason**: the classification of one record
//! - **QualityReport**: mergeable counters (total, valid, per-reason rejects)
//!
//! ## Example
//!
//! ```rust
//! use cleanse_core::{FieldRule, QualityReport, RejectReason, RuleSetBuilder};
//!
//! let rules = RuleSetBuilder::new("orders")
//!     .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
//!     .rule(FieldRule::contains(1, "email", "invalid_email", "@"))
//!     .build();
//! assert_eq!(rules.required_fields(), 2);
//!
//! let mut report = QualityReport::new();
//! report.record_total();
//! report.record_invalid(RejectReason::Rule("invalid_email".to_string()));
//! assert_eq!(report.invalid(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod presets;
pub mod report;
pub mod rule;
pub mod schema;

pub use builder::*;
pub use error::*;
pub use report::*;
pub use rule::*;
pub use schema::*;
