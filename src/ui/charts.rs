use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

/// Number of bins in the rating histogram.
const HISTOGRAM_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Rating histogram
// ---------------------------------------------------------------------------

/// Render the rating-distribution histogram over the filtered rows.
pub fn rating_histogram(ui: &mut Ui, state: &AppState) {
    ui.strong("Rating distribution");

    let Some(catalog) = &state.catalog else {
        return;
    };
    if state.visible_indices.is_empty() {
        ui.label("No apps match the current filters.");
        return;
    }

    let ratings: Vec<f64> = state
        .visible_indices
        .iter()
        .map(|&i| catalog.records[i].rating)
        .collect();

    let min = ratings.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = ratings.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = ((max - min) / HISTOGRAM_BINS as f64).max(f64::EPSILON);

    let mut counts = vec![0u32; HISTOGRAM_BINS];
    for r in &ratings {
        let bin = (((r - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        counts[bin] += 1;
    }

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let center = min + (i as f64 + 0.5) * width;
            Bar::new(center, count as f64)
                .width(width * 0.95)
                .fill(Color32::from_rgb(0x00, 0x83, 0xb8))
        })
        .collect();

    Plot::new("rating_histogram")
        .height(220.0)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_label("Rating")
        .y_axis_label("Apps")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Per-category bar charts
// ---------------------------------------------------------------------------

/// Render the "total installs per category" bar chart (descending).
pub fn installs_by_category(ui: &mut Ui, state: &AppState) {
    ui.strong("Total installs per category");

    if state.summary.category_installs.is_empty() {
        ui.label("No apps match the current filters.");
        return;
    }

    let data: Vec<(String, f64)> = state
        .summary
        .category_installs
        .iter()
        .map(|(cat, sum)| (cat.clone(), *sum as f64))
        .collect();
    category_bar_chart(ui, state, "installs_by_category", "Installs", &data);
}

/// Render the "mean price per category (paid apps)" bar chart, or an info
/// line when the paid view is absent.
pub fn paid_price_by_category(ui: &mut Ui, state: &AppState) {
    ui.strong("Average price per category (paid apps)");

    match &state.summary.paid_price_by_category {
        Some(view) => category_bar_chart(ui, state, "paid_price_by_category", "Price ($)", view),
        None => {
            ui.label("No paid apps in the current filter.");
        }
    }
}

/// One bar per category at integer x positions, coloured by the stable
/// category palette, with category names on the x axis.
fn category_bar_chart(
    ui: &mut Ui,
    state: &AppState,
    id: &str,
    y_label: &str,
    data: &[(String, f64)],
) {
    let bars: Vec<Bar> = data
        .iter()
        .enumerate()
        .map(|(i, (category, value))| {
            Bar::new(i as f64, *value)
                .width(0.7)
                .name(category)
                .fill(state.category_colors.color_for(category))
        })
        .collect();

    let names: Vec<String> = data.iter().map(|(cat, _)| cat.clone()).collect();

    Plot::new(id)
        .height(240.0)
        .allow_drag(false)
        .allow_scroll(false)
        .y_axis_label(y_label)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            names
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
