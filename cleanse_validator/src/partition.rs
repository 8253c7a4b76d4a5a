//! Streaming partition runner.
//!
//! A partition is an independently processed, ordered slice of the input,
//! typically one file. Each partition owns its validator pass, its output
//! sink, and its own `QualityReport`; nothing is shared during validation,
//! so any number of partitions can run concurrently and be merged once at
//! the end, in any order.

use crate::RecordValidator;
use cleanse_core::{Outcome, QualityReport};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Fatal errors on the partition read/write path.
///
/// Record rejections are never errors; only the surrounding I/O can fail.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading input or writing output failed
    #[error("I/O error while processing partition: {0}")]
    Io(#[from] std::io::Error),
}

/// Streams one partition through the validator.
///
/// Valid records are written to `writer` in input order, one per line,
/// as the trimmed original text. Returns the partition-local report.
/// A partial run leaves only this partition's sink in an undefined state;
/// other partitions are unaffected.
pub fn run_partition<R, W>(
    validator: &RecordValidator,
    reader: R,
    writer: &mut W,
) -> Result<QualityReport, RunError>
where
    R: BufRead,
    W: Write,
{
    let mut report = QualityReport::new();

    for line in reader.lines() {
        let line = line?;
        let outcome = validator.classify(&line);
        report.observe(&outcome);
        if outcome == Outcome::Valid {
            writeln!(writer, "{}", line.trim())?;
        }
    }
    writer.flush()?;

    tracing::debug!(
        total = report.total(),
        valid = report.valid(),
        "partition complete"
    );

    Ok(report)
}
