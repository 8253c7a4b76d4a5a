//! Builder pattern for creating rule sets.
//!
//! This module provides an ergonomic builder for constructing rule sets
//! with a fluent API.

use crate::{BlankLinePolicy, FieldRule, RuleSet};

/// Builder for creating a `RuleSet`.
///
/// # Example
///
/// ```rust
/// use cleanse_core::{BlankLinePolicy, FieldRule, RuleSetBuilder};
///
/// let rules = RuleSetBuilder::new("orders")
///     .version("1.0.0")
///     .description("Order export cleansing rules")
///     .blank_lines(BlankLinePolicy::Skip)
///     .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
///     .rule(FieldRule::contains(1, "email", "invalid_email", "@"))
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    delimiter: char,
    blank_lines: BlankLinePolicy,
    min_fields: Option<usize>,
    rules: Vec<FieldRule>,
}

impl RuleSetBuilder {
    /// Creates a new rule set builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique rule set name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some("1.0.0".to_string()),
            delimiter: ',',
            ..Default::default()
        }
    }

    /// Sets the rule set version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the rule set description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the blank-line policy.
    pub fn blank_lines(mut self, policy: BlankLinePolicy) -> Self {
        self.blank_lines = policy;
        self
    }

    /// Sets an explicit minimum field count.
    pub fn min_fields(mut self, min_fields: usize) -> Self {
        self.min_fields = Some(min_fields);
        self
    }

    /// Adds a rule.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple rules.
    pub fn rules(mut self, rules: Vec<FieldRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the rule set.
    ///
    /// # Panics
    ///
    /// Panics if required fields (name, version) are not set.
    pub fn build(self) -> RuleSet {
        RuleSet {
            version: self.version.expect("version is required"),
            name: self.name.expect("name is required"),
            description: self.description,
            delimiter: self.delimiter,
            blank_lines: self.blank_lines,
            min_fields: self.min_fields,
            rules: self.rules,
        }
    }
}
