//! Parser for rule set definitions (YAML/TOML formats).
//!
//! This module provides functionality to parse rule sets from YAML and TOML
//! files into the strongly-typed `RuleSet` structure. Parsed rule sets are
//! structurally validated before they are handed to the engine, so malformed
//! configuration fails before any data is read.
//!
//! # Example
//!
//! ```rust
//! use cleanse_parser::parse_yaml;
//!
//! let yaml = r#"
//! version: "1.0.0"
//! name: orders
//! description: Order export cleansing rules
//! rules:
//!   - index: 0
//!     field: order_id
//!     reason: invalid_order_id
//!     type: non_empty
//!   - index: 3
//!     field: email
//!     reason: invalid_email
//!     type: contains
//!     needle: "@"
//! "#;
//!
//! let rules = parse_yaml(yaml).expect("Failed to parse rule set");
//! assert_eq!(rules.name, "orders");
//! assert_eq!(rules.required_fields(), 4);
//! ```

use cleanse_core::{RuleSet, SchemaError};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during rule set parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// The rule set parsed but is structurally invalid
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(#[from] SchemaError),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported rule set file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSetFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a rule set from a YAML string.
///
/// The result is structurally validated: duplicate indices, duplicate reason
/// labels and empty rule lists are rejected.
pub fn parse_yaml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet = serde_yaml::from_str(content)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse a rule set from a TOML string.
///
/// # Example
///
/// ```rust
/// use cleanse_parser::parse_toml;
///
/// let toml = r#"
/// version = "1.0.0"
/// name = "orders"
///
/// [[rules]]
/// index = 0
/// field = "order_id"
/// reason = "invalid_order_id"
/// type = "non_empty"
/// "#;
///
/// let rules = parse_toml(toml).unwrap();
/// assert_eq!(rules.name, "orders");
/// ```
pub fn parse_toml(content: &str) -> Result<RuleSet> {
    let rules: RuleSet =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    rules.validate()?;
    Ok(rules)
}

/// Detect the rule set format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `RuleSetFormat::Yaml`
/// * `.toml` → `RuleSetFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<RuleSetFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(RuleSetFormat::Yaml),
        "toml" => Ok(RuleSetFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a rule set from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use cleanse_parser::parse_file;
/// use std::path::Path;
///
/// let rules = parse_file(Path::new("rules/orders.yml")).unwrap();
/// println!("Loaded rule set: {}", rules.name);
/// ```
pub fn parse_file(path: &Path) -> Result<RuleSet> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        RuleSetFormat::Yaml => parse_yaml(&content),
        RuleSetFormat::Toml => parse_toml(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanse_core::{BlankLinePolicy, FieldRule, RuleKind, RuleSetBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_yaml_minimal() {
        let yaml = r#"
version: "1.0.0"
name: minimal
rules:
  - index: 0
    field: id
    reason: invalid_id
    type: non_empty
"#;

        let rules = parse_yaml(yaml).expect("Failed to parse valid YAML");

        assert_eq!(rules.version, "1.0.0");
        assert_eq!(rules.name, "minimal");
        assert_eq!(rules.description, None);
        assert_eq!(rules.delimiter, ',');
        assert_eq!(rules.blank_lines, BlankLinePolicy::Skip);
        assert_eq!(rules.min_fields, None);
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(rules.rules[0].kind, RuleKind::NonEmpty);
    }

    #[test]
    fn test_parse_yaml_with_all_rule_kinds() {
        let yaml = r#"
version: "1.0.0"
name: orders
description: Order export cleansing rules
delimiter: ";"
blank_lines: count
min_fields: 10
rules:
  - index: 0
    field: order_id
    reason: invalid_order_id
    type: non_empty
  - index: 1
    field: email
    reason: invalid_email
    type: contains
    needle: "@"
  - index: 2
    field: age
    reason: invalid_age
    type: int_range
    min: 1
    max: 120
  - index: 3
    field: amount
    reason: invalid_amount
    type: float_range
    min: 0.0
    exclusive_min: true
  - index: 4
    field: feedback
    reason: invalid_feedback
    type: max_length
    max: 200
  - index: 5
    field: zip
    reason: invalid_zip
    type: matches
    pattern: "^[0-9]{5}$"
"#;

        let rules = parse_yaml(yaml).expect("Failed to parse YAML with all rule kinds");

        assert_eq!(rules.delimiter, ';');
        assert_eq!(rules.blank_lines, BlankLinePolicy::Count);
        assert_eq!(rules.required_fields(), 10);
        assert_eq!(rules.rules.len(), 6);
        assert_eq!(
            rules.rules[1].kind,
            RuleKind::Contains {
                needle: "@".to_string()
            }
        );
        assert_eq!(
            rules.rules[3].kind,
            RuleKind::FloatRange {
                min: Some(0.0),
                max: None,
                exclusive_min: true
            }
        );
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
version = "1.0.0"
name = "orders"
description = "Order export cleansing rules"

[[rules]]
index = 0
field = "order_id"
reason = "invalid_order_id"
type = "non_empty"

[[rules]]
index = 2
field = "quantity"
reason = "invalid_quantity"
type = "int_range"
min = 1
max = 999
"#;

        let rules = parse_toml(toml).expect("Failed to parse valid TOML");

        assert_eq!(rules.name, "orders");
        assert_eq!(rules.rules.len(), 2);
        assert_eq!(rules.required_fields(), 3);
        assert_eq!(rules.rules[1].kind, RuleKind::IntRange { min: 1, max: 999 });
    }

    #[test]
    fn test_round_trip_yaml() {
        // Create a rule set, serialize to YAML, parse it back
        let original = RuleSetBuilder::new("orders")
            .version("1.0.0")
            .blank_lines(BlankLinePolicy::Count)
            .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
            .rule(FieldRule::contains(1, "email", "invalid_email", "@"))
            .rule(FieldRule::float_gt(3, "amount", "invalid_amount", 0.0))
            .rule(FieldRule::max_length(5, "feedback", "invalid_feedback", 200))
            .build();

        let yaml = serde_yaml::to_string(&original).expect("Failed to serialize");
        let parsed = parse_yaml(&yaml).expect("Failed to parse");

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_round_trip_toml() {
        let original = RuleSetBuilder::new("orders")
            .version("1.0.0")
            .description("Order export cleansing rules")
            .min_fields(10)
            .rule(FieldRule::non_empty(0, "order_id", "invalid_order_id"))
            .rule(FieldRule::contains(1, "email", "invalid_email", "@"))
            .rule(FieldRule::int_range(2, "quantity", "invalid_quantity", 1, 999))
            .rule(FieldRule::matches(4, "zip", "invalid_zip", "^[0-9]{5}$"))
            .build();

        let toml = toml::to_string(&original).expect("Failed to serialize");
        let parsed = parse_toml(&toml).expect("Failed to parse");

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_rejects_duplicate_index() {
        let yaml = r#"
version: "1.0.0"
name: broken
rules:
  - index: 0
    field: a
    reason: invalid_a
    type: non_empty
  - index: 0
    field: b
    reason: invalid_b
    type: non_empty
"#;

        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParserError::InvalidRuleSet(SchemaError::DuplicateIndex { index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_empty_rules() {
        let yaml = r#"
version: "1.0.0"
name: empty
rules: []
"#;

        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParserError::InvalidRuleSet(SchemaError::Empty(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_rule_kind() {
        let yaml = r#"
version: "1.0.0"
name: broken
rules:
  - index: 0
    field: a
    reason: invalid_a
    type: shouting
"#;

        assert!(matches!(
            parse_yaml(yaml),
            Err(ParserError::YamlError(_))
        ));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("rules.yml")).unwrap(),
            RuleSetFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("rules.YAML")).unwrap(),
            RuleSetFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("rules.toml")).unwrap(),
            RuleSetFormat::Toml
        );
        assert!(matches!(
            detect_format(Path::new("rules.json")),
            Err(ParserError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format(Path::new("rules")),
            Err(ParserError::InvalidExtension)
        ));
    }
}
