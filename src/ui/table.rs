use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;
use crate::ui::{fmt_price, fmt_thousands};

// ---------------------------------------------------------------------------
// Top-rated table
// ---------------------------------------------------------------------------

/// Render the top-10-by-rating table over the filtered rows.
pub fn top_rated_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Top rated apps");

    let Some(catalog) = &state.catalog else {
        return;
    };
    if state.summary.top_rated.is_empty() {
        ui.label("No apps match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(160.0)) // app
        .column(Column::auto().at_least(100.0)) // category
        .column(Column::auto().at_least(60.0)) // rating
        .column(Column::auto().at_least(90.0)) // installs
        .column(Column::auto().at_least(60.0)) // type
        .column(Column::auto().at_least(60.0)) // price
        .header(20.0, |mut header| {
            for title in ["App", "Category", "Rating", "Installs", "Type", "Price"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for &idx in &state.summary.top_rated {
                let rec = &catalog.records[idx];
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&rec.app);
                    });
                    row.col(|ui| {
                        ui.label(&rec.category);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}", rec.rating));
                    });
                    row.col(|ui| {
                        ui.label(fmt_thousands(rec.installs));
                    });
                    row.col(|ui| {
                        ui.label(&rec.app_type);
                    });
                    row.col(|ui| {
                        ui.label(fmt_price(rec.price));
                    });
                });
            }
        });
}
