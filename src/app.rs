use eframe::egui::{self, ScrollArea};

use crate::state::AppState;
use crate::ui::{charts, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlayDashApp {
    pub state: AppState,
}

impl PlayDashApp {
    /// Start with an already-loaded catalog (the usual path: CSV loaded at
    /// startup), or empty when no dataset was found.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PlayDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: KPIs, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.catalog.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a Play Store CSV export  (File → Open…)");
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::kpi_row(ui, &self.state);
                    ui.add_space(12.0);

                    charts::rating_histogram(ui, &self.state);
                    ui.add_space(12.0);

                    charts::installs_by_category(ui, &self.state);
                    ui.add_space(12.0);

                    charts::paid_price_by_category(ui, &self.state);
                    ui.add_space(12.0);

                    table::top_rated_table(ui, &self.state);
                });
        });
    }
}
