use anyhow::{anyhow, bail, Context, Result};
use cleanse_core::{presets, QualityReport, RuleSet};
use cleanse_parser::parse_file;
use cleanse_validator::{run_partition, RecordValidator};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::output;

pub async fn execute(
    input: &str,
    output: &str,
    rules_path: Option<&str>,
    preset: &str,
    format: &str,
) -> Result<()> {
    let rule_set = load_rule_set(rules_path, preset)?;
    info!(
        "Rule set '{}' v{}: {} rules, {} required fields",
        rule_set.name,
        rule_set.version,
        rule_set.rules.len(),
        rule_set.required_fields()
    );

    let partitions = collect_partitions(Path::new(input))?;
    info!("Processing {} input partition(s)", partitions.len());

    let output_dir = Path::new(output);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output))?;

    let validator = Arc::new(
        RecordValidator::new(rule_set.clone())
            .map_err(|e| anyhow!("Invalid rule set '{}': {}", rule_set.name, e))?,
    );

    let start = Instant::now();

    // One blocking task per partition; no shared state during validation
    let mut handles = Vec::with_capacity(partitions.len());
    for (idx, partition) in partitions.into_iter().enumerate() {
        let validator = Arc::clone(&validator);
        let part_path = output_dir.join(format!("part-{:05}", idx));

        handles.push(tokio::task::spawn_blocking(move || {
            let reader = BufReader::new(
                File::open(&partition)
                    .with_context(|| format!("Failed to read partition: {}", partition.display()))?,
            );
            let mut writer = BufWriter::new(File::create(&part_path).with_context(|| {
                format!("Failed to create output partition: {}", part_path.display())
            })?);

            let report = run_partition(&validator, reader, &mut writer)
                .with_context(|| format!("Partition failed: {}", partition.display()))?;
            Ok::<QualityReport, anyhow::Error>(report)
        }));
    }

    // Single-threaded reduction once every partition has reported
    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        reports.push(handle.await.context("Partition worker panicked")??);
    }
    let report = QualityReport::merge_all(reports);

    output::print_quality_report(&report, &rule_set, format, start.elapsed());

    // Rejected records are expected data, not a failure; only I/O or
    // configuration problems produce a non-zero exit
    Ok(())
}

/// Loads the active rule set: an explicit file wins over a preset name.
fn load_rule_set(rules_path: Option<&str>, preset: &str) -> Result<RuleSet> {
    if let Some(path) = rules_path {
        return parse_file(Path::new(path))
            .with_context(|| format!("Failed to load rule set file: {}", path));
    }

    match preset {
        "full" => Ok(presets::ecommerce_full()),
        "basic" => Ok(presets::ecommerce_basic()),
        other => bail!("Unknown preset '{}' (expected: full, basic)", other),
    }
}

/// Resolves the input path into an ordered list of partition files.
///
/// A directory contributes each of its regular files, sorted by name so the
/// partition numbering is stable across runs.
fn collect_partitions(input: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(input)
        .with_context(|| format!("Failed to read input path: {}", input.display()))?;

    if metadata.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(input)
        .with_context(|| format!("Failed to list input directory: {}", input.display()))?
    {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("No input partitions found in {}", input.display());
    }

    Ok(files)
}
