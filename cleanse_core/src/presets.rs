//! Built-in rule sets for the e-commerce transaction export.
//!
//! Two variants of the same 28-column layout: the full per-column audit and
//! a lighter pass that only guards the columns downstream jobs consume.
//! Both are plain data tables; the engine does not know they exist.

use crate::{FieldRule, RuleSet, RuleSetBuilder};

/// Full 28-rule cleansing pass over the 28-column transaction export.
///
/// One rule per column, in column order. Numeric bounds: age 1-120,
/// year 2000-2100, month 1-12, day 1-31, amount strictly positive,
/// rating 0-5 inclusive, feedback at most 200 characters untrimmed.
pub fn ecommerce_full() -> RuleSet {
    RuleSetBuilder::new("ecommerce_full")
        .version("1.0.0")
        .description("Per-column audit of the 28-column transaction export")
        .rules(vec![
            FieldRule::non_empty(0, "transaction_id", "invalid_transaction_id"),
            FieldRule::non_empty(1, "customer_id", "invalid_customer_id"),
            FieldRule::non_empty(2, "name", "invalid_name"),
            FieldRule::contains(3, "email", "invalid_email", "@"),
            FieldRule::non_empty(4, "phone", "invalid_phone"),
            FieldRule::non_empty(5, "address", "invalid_address"),
            FieldRule::non_empty(6, "city", "invalid_city"),
            FieldRule::non_empty(7, "state", "invalid_state"),
            FieldRule::non_empty(8, "zip", "invalid_zip"),
            FieldRule::non_empty(9, "country", "invalid_country"),
            FieldRule::int_range(10, "age", "invalid_age", 1, 120),
            FieldRule::non_empty(11, "gender", "invalid_gender"),
            FieldRule::non_empty(12, "income", "invalid_income"),
            FieldRule::non_empty(13, "segment", "invalid_segment"),
            FieldRule::int_range(14, "year", "invalid_year", 2000, 2100),
            FieldRule::int_range(15, "month", "invalid_month", 1, 12),
            FieldRule::int_range(16, "day", "invalid_day", 1, 31),
            FieldRule::non_empty(17, "time", "invalid_time"),
            FieldRule::float_gt(18, "amount", "invalid_amount", 0.0),
            FieldRule::non_empty(19, "product_category", "invalid_category"),
            FieldRule::non_empty(20, "product_brand", "invalid_brand"),
            FieldRule::non_empty(21, "product_type", "invalid_type"),
            FieldRule::max_length(22, "feedback", "invalid_feedback", 200),
            FieldRule::non_empty(23, "shipping", "invalid_shipping"),
            FieldRule::non_empty(24, "payment_method", "invalid_payment"),
            FieldRule::non_empty(25, "order_status", "invalid_status"),
            FieldRule::float_range(26, "rating", "invalid_rating", Some(0.0), Some(5.0)),
            FieldRule::non_empty(27, "product_list", "invalid_product_list"),
        ])
        .build()
}

/// Lighter 7-rule pass guarding only the columns downstream jobs consume.
///
/// Same column layout; the highest inspected column is order_status, so
/// records need 26 fields.
pub fn ecommerce_basic() -> RuleSet {
    RuleSetBuilder::new("ecommerce_basic")
        .version("1.0.0")
        .description("Minimal guard over the columns downstream jobs consume")
        .rules(vec![
            FieldRule::non_empty(1, "customer_id", "invalid_customer_id"),
            FieldRule::non_empty(2, "name", "invalid_name"),
            FieldRule::int_range(10, "age", "invalid_age", 1, 120),
            FieldRule::float_gt(18, "amount", "invalid_amount", 0.0),
            FieldRule::non_empty(19, "product_category", "invalid_category"),
            FieldRule::non_empty(24, "payment_method", "invalid_payment"),
            FieldRule::non_empty(25, "order_status", "invalid_status"),
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_preset_covers_all_columns() {
        let rules = ecommerce_full();
        assert_eq!(rules.rules.len(), 28);
        assert_eq!(rules.required_fields(), 28);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn basic_preset_requires_26_columns() {
        let rules = ecommerce_basic();
        assert_eq!(rules.rules.len(), 7);
        assert_eq!(rules.required_fields(), 26);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn presets_swap_without_reindexing() {
        // Both variants address the same column layout
        let full = ecommerce_full();
        let basic = ecommerce_basic();
        for rule in &basic.rules {
            let counterpart = full
                .rules
                .iter()
                .find(|r| r.index == rule.index)
                .expect("basic rule column present in full preset");
            assert_eq!(counterpart.field, rule.field);
        }
    }
}
