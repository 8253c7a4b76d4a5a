//! Error types for rule set configuration.
//!
//! Data-quality failures are never errors: they are classified outcomes
//! reported through `QualityReport`. The errors here cover malformed rule
//! sets only, and are caught before any data is read.

use thiserror::Error;

/// Result type for rule set operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// A structurally invalid rule set.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The rule set declares no rules
    #[error("rule set '{0}' declares no rules")]
    Empty(String),

    /// Two rules inspect the same column index
    #[error("duplicate rule index {index} in rule set '{name}'")]
    DuplicateIndex {
        /// Rule set name
        name: String,
        /// Offending column index
        index: usize,
    },

    /// Two rules share a rejection reason label
    #[error("duplicate rejection reason '{reason}' in rule set '{name}'")]
    DuplicateReason {
        /// Rule set name
        name: String,
        /// Offending label
        reason: String,
    },

    /// A rule uses the reserved too-few-fields label
    #[error("rejection reason '{0}' is reserved")]
    ReservedReason(String),

    /// A `Matches` rule carries an invalid regex
    #[error("invalid pattern for field '{field}': {error}")]
    InvalidPattern {
        /// Field name
        field: String,
        /// Regex compile error
        error: String,
    },
}
