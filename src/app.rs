use eframe::egui::{self, Ui};

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DeckhandApp {
    pub state: AppState,
}

impl eframe::App for DeckhandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: summary + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selector + distinct-value table ----
        egui::SidePanel::left("column_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the chart pair, stacked ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(output) = &self.state.output else {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Select a column to explore the manifest");
                });
                return;
            };

            let half = (ui.available_height() - 40.0) / 2.0;
            charts::chart_view(ui, "primary_chart", &output.primary, half);
            ui.separator();
            charts::chart_view(ui, "secondary_chart", &output.secondary, half);
        });
    }
}
