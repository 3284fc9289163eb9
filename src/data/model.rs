use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

// ---------------------------------------------------------------------------
// MetricsRecord – one row of the metrics table
// ---------------------------------------------------------------------------

/// Metrics extracted for a single active-learning iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsRecord {
    /// Iteration index (x-axis key, unique within a table).
    pub iteration: u32,
    /// Mean committee uncertainty over the queried batch.
    /// `NaN` for the synthetic baseline record, which has no batch.
    pub batch_uncertainty: f64,
    /// Coefficient of determination on the held-out test set (may be negative).
    pub test_r2: f64,
    /// Mean absolute error on the held-out test set.
    pub test_mae: f64,
}

/// Payload of a `Start:` log line. Becomes the iteration-0 baseline record
/// unless an explicit iteration-0 line is present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartRecord {
    pub test_r2: f64,
    pub test_mae: f64,
}

// ---------------------------------------------------------------------------
// MetricsTable – the complete parsed run
// ---------------------------------------------------------------------------

/// The full parsed table, unique and sorted ascending by iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    pub records: Vec<MetricsRecord>,
}

impl MetricsTable {
    /// Assemble a table from parsed iteration records and an optional start
    /// record.
    ///
    /// Records are keyed by iteration index: the last-parsed record wins for
    /// a duplicated index, and the start record fills slot 0 only when no
    /// explicit iteration-0 record exists. The keyed map also yields the
    /// ascending order.
    pub fn from_records(records: Vec<MetricsRecord>, start: Option<StartRecord>) -> Self {
        let mut by_iteration: BTreeMap<u32, MetricsRecord> = BTreeMap::new();

        for rec in records {
            by_iteration.insert(rec.iteration, rec);
        }

        if let Some(s) = start {
            by_iteration.entry(0).or_insert(MetricsRecord {
                iteration: 0,
                batch_uncertainty: f64::NAN,
                test_r2: s.test_r2,
                test_mae: s.test_mae,
            });
        }

        MetricsTable {
            records: by_iteration.into_values().collect(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aligned text rendering of the first `n` rows for stdout.
    pub fn preview(&self, n: usize) -> String {
        let mut out = String::from(" iteration  batch_uncertainty  test_r2  test_mae\n");
        for rec in self.records.iter().take(n) {
            let _ = writeln!(
                out,
                "{:>10}  {:>17}  {:>7}  {:>8}",
                rec.iteration,
                fmt_metric(rec.batch_uncertainty),
                fmt_metric(rec.test_r2),
                fmt_metric(rec.test_mae),
            );
        }
        out
    }
}

fn fmt_metric(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}
