use anyhow::{Context, Result};
use cleanse_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(rules_path: &str) -> Result<()> {
    info!("Checking rule set: {}", rules_path);

    let path = Path::new(rules_path);
    let rule_set = parse_file(path)
        .with_context(|| format!("Failed to load rule set file: {}", rules_path))?;

    output::print_info(&format!(
        "Rule set loaded: {} v{}",
        rule_set.name, rule_set.version
    ));

    // Parsing validates structure, so the rule set is usable as-is
    output::print_success("Rule set is valid");

    println!("\nRule Set Summary:");
    println!("  Name:            {}", rule_set.name);
    println!("  Version:         {}", rule_set.version);
    println!(
        "  Description:     {}",
        rule_set.description.as_deref().unwrap_or("N/A")
    );
    println!("  Delimiter:       {:?}", rule_set.delimiter);
    println!("  Blank lines:     {:?}", rule_set.blank_lines);
    println!("  Required fields: {}", rule_set.required_fields());
    println!("  Rules:           {}", rule_set.rules.len());

    println!("\nRules (evaluated in order):");
    for rule in &rule_set.rules {
        println!(
            "  [{:>3}] {:<20} {:<28} -> {}",
            rule.index,
            rule.field,
            rule.kind.describe(),
            rule.reason
        );
    }

    Ok(())
}
