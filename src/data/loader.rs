use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::model::{MetricsRecord, MetricsTable, StartRecord};

// ---------------------------------------------------------------------------
// Line shapes
// ---------------------------------------------------------------------------

/// Iteration line, e.g.
/// `Iteração 7: 12 novos pontos | Incerteza Média Batch: 0.0312 | Test R2: 0.8841 | Test MAE: 0.4172`
///
/// Keyword matching is case-insensitive and tolerates the undiacritized
/// `Iteracao` spelling. The numeric class is deliberately loose: anything it
/// admits is handed to the float parser as-is.
static ITER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)Itera(?:ção|cao)\s+(\d+):.*?Incerteza Média Batch:\s*([-0-9.eE]+)\s*\|\s*Test R2:\s*([-0-9.eE]+)\s*\|\s*Test MAE:\s*([-0-9.eE]+)",
    )
    .expect("invalid iteration-line regex")
});

/// Baseline line written before the first iteration, e.g.
/// `Start: modelo inicial | Test R2=0.5120 | Test MAE=1.2034`
static START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Start:.*Test R2=([-0-9.eE]+)\s*\|\s*Test MAE=([-0-9.eE]+)")
        .expect("invalid start-line regex")
});

/// Parse failure distinguished by the CLI.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Neither line shape matched anywhere in the input.
    #[error("No iteration lines found. Check file format.")]
    NoRecords,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a metrics table from a partial-results log file.
pub fn load_log(path: &Path) -> Result<MetricsTable> {
    let file = File::open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    parse_log(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

/// Scan a log line by line and assemble the metrics table.
///
/// Each line matches at most one shape, iteration lines first. Lines
/// matching neither shape are skipped. A float that matches the pattern but
/// fails to parse (e.g. `1.2.3`) is an error, not a skip.
pub fn parse_log<R: BufRead>(reader: R) -> Result<MetricsTable> {
    let mut records = Vec::new();
    let mut start: Option<StartRecord> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading log line {}", line_no + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = ITER_RE.captures(line) {
            let iteration: u32 = caps[1]
                .parse()
                .with_context(|| format!("line {}: iteration index '{}'", line_no + 1, &caps[1]))?;
            records.push(MetricsRecord {
                iteration,
                batch_uncertainty: parse_metric(&caps, 2, "batch uncertainty", line_no)?,
                test_r2: parse_metric(&caps, 3, "test R2", line_no)?,
                test_mae: parse_metric(&caps, 4, "test MAE", line_no)?,
            });
            continue;
        }

        if let Some(caps) = START_RE.captures(line) {
            if start.is_none() {
                start = Some(StartRecord {
                    test_r2: parse_metric(&caps, 1, "test R2", line_no)?,
                    test_mae: parse_metric(&caps, 2, "test MAE", line_no)?,
                });
            } else {
                warn!("line {}: extra start line ignored", line_no + 1);
            }
            continue;
        }

        debug!("line {}: no match, skipped", line_no + 1);
    }

    if records.is_empty() && start.is_none() {
        return Err(ParseError::NoRecords.into());
    }
    Ok(MetricsTable::from_records(records, start))
}

fn parse_metric(caps: &regex::Captures<'_>, group: usize, field: &str, line_no: usize) -> Result<f64> {
    caps[group]
        .parse()
        .with_context(|| format!("line {}: {field} value '{}'", line_no + 1, &caps[group]))
}
