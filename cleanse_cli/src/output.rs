use chrono::Utc;
use cleanse_core::{QualityReport, RejectReason, RuleSet};
use colored::*;
use serde_json::json;
use std::time::Duration;

pub fn print_quality_report(
    report: &QualityReport,
    rule_set: &RuleSet,
    format: &str,
    elapsed: Duration,
) {
    match format {
        "json" => print_json_report(report, rule_set, elapsed),
        _ => print_text_report(report, rule_set, elapsed),
    }
}

/// Reasons in rendering order: too-few-fields first, then schema order.
fn ordered_reasons(rule_set: &RuleSet) -> Vec<RejectReason> {
    let mut reasons = vec![RejectReason::TooFewFields];
    reasons.extend(
        rule_set
            .rules
            .iter()
            .map(|rule| RejectReason::Rule(rule.reason.clone())),
    );
    reasons
}

fn print_text_report(report: &QualityReport, rule_set: &RuleSet, elapsed: Duration) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  CLEANSING REPORT".bold());
    println!("{}", "═".repeat(60));

    println!("\n{}", "Records:".bold());
    println!("  Total:   {}", report.total());
    println!(
        "  Valid:   {} ({})",
        report.valid().to_string().green(),
        format!("{:.2}%", report.valid_rate()).green()
    );
    println!(
        "  Invalid: {} ({})",
        report.invalid().to_string().red(),
        format!("{:.2}%", 100.0 - report.valid_rate()).red()
    );
    println!("  Elapsed: {:.2}s", elapsed.as_secs_f64());

    if report.invalid() > 0 {
        println!("\n{}", "Rejection breakdown:".red().bold());
        for reason in ordered_reasons(rule_set) {
            let count = report.reject_count(&reason);
            if count > 0 {
                println!("  {:<28} {}", reason.label(), count);
            }
        }
    } else if report.total() > 0 {
        println!("\n{} {}", "✓".green().bold(), "All records valid".green());
    }

    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &QualityReport, rule_set: &RuleSet, elapsed: Duration) {
    let rejects: Vec<_> = ordered_reasons(rule_set)
        .into_iter()
        .filter_map(|reason| {
            let count = report.reject_count(&reason);
            (count > 0).then(|| {
                json!({
                    "reason": reason.label(),
                    "count": count,
                })
            })
        })
        .collect();

    let output = json!({
        "generated_at": Utc::now().to_rfc3339(),
        "rule_set": rule_set.name,
        "total": report.total(),
        "valid": report.valid(),
        "invalid": report.invalid(),
        "valid_rate": report.valid_rate(),
        "elapsed_ms": elapsed.as_millis() as u64,
        "rejects": rejects,
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
