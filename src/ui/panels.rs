use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;
use crate::ui::fmt_thousands;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one combo box per filter dimension,
/// each offering "All" plus the sorted distinct values from the catalog.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(catalog) = &state.catalog else {
        ui.label("No dataset loaded.");
        return;
    };

    let categories = catalog.categories.clone();
    let types = catalog.types.clone();

    ui.strong("Category");
    if let Some(choice) = selection_combo(ui, "category_filter", &state.selection.category, &categories)
    {
        state.select_category(choice);
    }
    ui.add_space(8.0);

    ui.strong("App type");
    if let Some(choice) = selection_combo(ui, "type_filter", &state.selection.app_type, &types) {
        state.select_type(choice);
    }

    ui.add_space(12.0);
    ui.separator();
    ui.label(format!(
        "{} of {} apps match",
        state.visible_indices.len(),
        state.catalog.as_ref().map(|c| c.len()).unwrap_or(0)
    ));
}

/// An "All"-plus-values combo box. Returns `Some(new_selection)` when the
/// user picks an entry, `None` when nothing changed.
fn selection_combo(
    ui: &mut Ui,
    id: &str,
    current: &Option<String>,
    values: &[String],
) -> Option<Option<String>> {
    let mut picked = None;
    let current_label = current.as_deref().unwrap_or("All");

    egui::ComboBox::from_id_salt(id)
        .selected_text(current_label)
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "All").clicked() {
                picked = Some(None);
            }
            for value in values {
                let is_current = current.as_deref() == Some(value.as_str());
                if ui.selectable_label(is_current, value).clicked() {
                    picked = Some(Some(value.clone()));
                }
            }
        });

    picked
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} apps · {} categories",
                fmt_thousands(catalog.len() as u64),
                catalog.categories.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// KPI cards
// ---------------------------------------------------------------------------

/// Render the three filtered-KPI cards: mean rating, total installs, mean
/// paid price. An absent mean paid price displays as a hard `$0.00`, never
/// as a NaN.
pub fn kpi_row(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;

    let rating = summary
        .mean_rating
        .map(|r| format!("{r:.2}"))
        .unwrap_or_else(|| "–".to_string());
    let installs = fmt_thousands(summary.total_installs);
    let paid_price = format!("${:.2}", summary.mean_paid_price.unwrap_or(0.0));

    ui.columns(3, |cols| {
        kpi_card(&mut cols[0], "Average rating", &rating);
        kpi_card(&mut cols[1], "Total installs", &installs);
        kpi_card(&mut cols[2], "Average price (paid)", &paid_price);
    });
}

fn kpi_card(ui: &mut Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(label);
            ui.heading(RichText::new(value).size(26.0));
        });
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open Play Store export")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(catalog) => {
                state.set_catalog(catalog);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
