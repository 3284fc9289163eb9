use std::path::Path;

use anyhow::{Context, Result};

use super::model::MetricsTable;

/// Write the parsed table as CSV, one row per iteration, header included.
/// The baseline record's missing uncertainty is written as `NaN`.
pub fn write_csv(table: &MetricsTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for rec in &table.records {
        writer
            .serialize(rec)
            .with_context(|| format!("writing record for iteration {}", rec.iteration))?;
    }

    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{MetricsRecord, MetricsTable, StartRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn csv_has_header_and_nan_baseline() {
        let table = MetricsTable::from_records(
            vec![MetricsRecord {
                iteration: 1,
                batch_uncertainty: 0.3,
                test_r2: 0.6,
                test_mae: 1.0,
            }],
            Some(StartRecord {
                test_r2: 0.5,
                test_mae: 1.2,
            }),
        );

        let path = std::env::temp_dir().join("al_report_export_test.csv");
        write_csv(&table, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("iteration,batch_uncertainty,test_r2,test_mae")
        );
        let baseline = lines.next().unwrap();
        assert!(baseline.starts_with("0,NaN,"));
        assert_eq!(lines.next(), Some("1,0.3,0.6,1.0"));
    }
}
