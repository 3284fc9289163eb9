use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::series_palette;
use crate::data::model::{MetricsRecord, MetricsTable};

// ---------------------------------------------------------------------------
// PNG renderer – three stacked panels over a shared iteration axis
// ---------------------------------------------------------------------------

/// Raster target: 10×8 in at 150 dpi.
const WIDTH: u32 = 1500;
const HEIGHT: u32 = 1200;

const TITLE: &str = "Active Learning (QBC) Partial Results Over Iterations";
const GRID: RGBColor = RGBColor(220, 220, 220);

/// Render the metrics table as a stacked three-panel line chart and write it
/// to `path` as a PNG. The backing bitmap is dropped on every exit path.
pub fn save_png(table: &MetricsTable, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).context("filling chart background")?;

    let titled = root
        .titled(TITLE, ("sans-serif", 36))
        .context("drawing figure title")?;
    let panels = titled.split_evenly((3, 1));
    let colors = series_palette(3);

    draw_panel(
        &panels[0],
        table,
        |r| r.batch_uncertainty,
        "Batch uncertainty",
        None,
        colors[0],
    )?;
    draw_panel(&panels[1], table, |r| r.test_r2, "Test R2", None, colors[1])?;
    draw_panel(
        &panels[2],
        table,
        |r| r.test_mae,
        "Test MAE",
        Some("Iteration"),
        colors[2],
    )?;

    root.present()
        .with_context(|| format!("writing chart to {}", path.display()))?;
    Ok(())
}

/// One panel: thin line plus point markers. NaN values (the baseline record
/// has no batch uncertainty) break the line into segments and get no marker.
fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    table: &MetricsTable,
    select: impl Fn(&MetricsRecord) -> f64,
    y_desc: &str,
    x_desc: Option<&str>,
    rgb: (u8, u8, u8),
) -> Result<()> {
    let points: Vec<(f64, f64)> = table
        .records
        .iter()
        .map(|r| (r.iteration as f64, select(r)))
        .collect();

    let x_max = points.last().map(|p| p.0).unwrap_or(0.0);
    let (y_min, y_max) = value_range(points.iter().map(|p| p.1));

    let color = RGBColor(rgb.0, rgb.1, rgb.2);
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..x_max + 0.5, y_min..y_max)
        .with_context(|| format!("building {y_desc} panel"))?;

    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(GRID).y_desc(y_desc);
    if let Some(desc) = x_desc {
        mesh.x_desc(desc);
    }
    mesh.draw().context("drawing panel mesh")?;

    for segment in points.split(|p| p.1.is_nan()) {
        if segment.len() > 1 {
            chart
                .draw_series(LineSeries::new(
                    segment.iter().copied(),
                    color.stroke_width(1),
                ))
                .with_context(|| format!("drawing {y_desc} line"))?;
        }
    }
    chart
        .draw_series(
            points
                .iter()
                .filter(|p| p.1.is_finite())
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )
        .with_context(|| format!("drawing {y_desc} markers"))?;

    Ok(())
}

/// Padded y-range over the finite values of a series. A flat or all-NaN
/// series still yields a non-degenerate range.
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return (0.0, 1.0);
    }
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StartRecord;
    use pretty_assertions::assert_eq;

    fn sample_table() -> MetricsTable {
        MetricsTable::from_records(
            vec![
                MetricsRecord {
                    iteration: 1,
                    batch_uncertainty: 0.3,
                    test_r2: 0.6,
                    test_mae: 1.0,
                },
                MetricsRecord {
                    iteration: 2,
                    batch_uncertainty: 0.25,
                    test_r2: 0.66,
                    test_mae: 0.9,
                },
            ],
            Some(StartRecord {
                test_r2: 0.5,
                test_mae: 1.2,
            }),
        )
    }

    #[test]
    fn value_range_pads_and_survives_flat_series() {
        let (lo, hi) = value_range([1.0, 2.0].into_iter());
        assert!(lo < 1.0 && hi > 2.0);

        let (lo, hi) = value_range([3.0, 3.0].into_iter());
        assert_eq!((lo, hi), (2.5, 3.5));

        let (lo, hi) = value_range([f64::NAN].into_iter());
        assert_eq!((lo, hi), (0.0, 1.0));
    }

    #[test]
    fn save_png_writes_fixed_dimensions() {
        let path = std::env::temp_dir().join("al_report_chart_test.png");
        save_png(&sample_table(), &path).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (WIDTH, HEIGHT));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rendering_twice_is_layout_stable() {
        let path = std::env::temp_dir().join("al_report_chart_rerun_test.png");
        save_png(&sample_table(), &path).unwrap();
        let first = image::image_dimensions(&path).unwrap();
        save_png(&sample_table(), &path).unwrap();
        let second = image::image_dimensions(&path).unwrap();
        assert_eq!(first, second);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn nan_baseline_renders_as_gap_not_error() {
        // One finite point next to the NaN baseline: the uncertainty panel
        // has no drawable line segment, only a marker.
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
        let path = std::env::temp_dir().join("al_report_chart_gap_test.png");
        save_png(&table, &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }
}
