use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints, Points};

use crate::color::series_palette;
use crate::data::model::{MetricsRecord, MetricsTable};

// ---------------------------------------------------------------------------
// Stacked metric panels (central panel)
// ---------------------------------------------------------------------------

/// Render the three metric panels, one above the other, sharing the
/// iteration domain.
pub fn stacked_metrics_plot(ui: &mut Ui, table: &MetricsTable) {
    let colors = series_palette(3);
    let spacing = ui.spacing().item_spacing.y;
    let panel_height = ((ui.available_height() - 2.0 * spacing) / 3.0).max(60.0);

    metric_panel(
        ui,
        table,
        |r| r.batch_uncertainty,
        "uncertainty_panel",
        "Batch uncertainty",
        None,
        panel_height,
        colors[0],
    );
    metric_panel(
        ui,
        table,
        |r| r.test_r2,
        "r2_panel",
        "Test R2",
        None,
        panel_height,
        colors[1],
    );
    metric_panel(
        ui,
        table,
        |r| r.test_mae,
        "mae_panel",
        "Test MAE",
        Some("Iteration"),
        panel_height,
        colors[2],
    );
}

#[allow(clippy::too_many_arguments)]
fn metric_panel(
    ui: &mut Ui,
    table: &MetricsTable,
    select: impl Fn(&MetricsRecord) -> f64,
    id: &str,
    y_label: &str,
    x_label: Option<&str>,
    height: f32,
    rgb: (u8, u8, u8),
) {
    let color = Color32::from_rgb(rgb.0, rgb.1, rgb.2);

    // NaN points (the baseline record's missing uncertainty) are dropped so
    // the series shows a gap instead of a broken polyline.
    let coords: Vec<[f64; 2]> = table
        .records
        .iter()
        .map(|r| [r.iteration as f64, select(r)])
        .filter(|p| p[1].is_finite())
        .collect();

    let mut plot = Plot::new(id)
        .height(height)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if let Some(label) = x_label {
        plot = plot.x_axis_label(label);
    }

    plot.show(ui, |plot_ui| {
        let line_points: PlotPoints = coords.iter().copied().collect();
        plot_ui.line(Line::new(line_points).color(color).width(1.0));

        let marker_points: PlotPoints = coords.iter().copied().collect();
        plot_ui.points(Points::new(marker_points).color(color).radius(2.5));
    });
}
