use eframe::egui;

use crate::data::model::MetricsTable;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Read-only chart window shown after the PNG is saved.
pub struct ReportApp {
    table: MetricsTable,
}

impl ReportApp {
    pub fn new(table: MetricsTable) -> Self {
        Self { table }
    }
}

impl eframe::App for ReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::stacked_metrics_plot(ui, &self.table);
        });
    }
}

/// Open the interactive chart window. Blocks until the window is closed.
pub fn show_window(table: MetricsTable) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Active Learning Partial Results",
        options,
        Box::new(|_cc| Ok(Box::new(ReportApp::new(table)))),
    )
}
