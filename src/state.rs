use crate::color::CategoryColors;
use crate::data::aggregate::{summarize, DashboardSummary};
use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::AppCatalog;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `catalog` is the once-loaded working set; it is never mutated after
/// [`AppState::set_catalog`]. `visible_indices` and `summary` are the derived
/// views, recomputed as a pure function of (catalog, selection) whenever a
/// filter changes.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub catalog: Option<AppCatalog>,

    /// Current sidebar selections (None = "All" per dimension).
    pub selection: Selection,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over the visible records (cached).
    pub summary: DashboardSummary,

    /// Stable category → colour mapping for the charts.
    pub category_colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: None,
            selection: Selection::default(),
            visible_indices: Vec::new(),
            summary: DashboardSummary::default(),
            category_colors: CategoryColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded catalog, reset filters, and derive the views.
    pub fn set_catalog(&mut self, catalog: AppCatalog) {
        self.category_colors = CategoryColors::new(&catalog.categories);
        self.selection = Selection::default();
        self.catalog = Some(catalog);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and `summary` after a selection change.
    pub fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = filtered_indices(catalog, &self.selection);
            self.summary = summarize(catalog, &self.visible_indices);
        } else {
            self.visible_indices.clear();
            self.summary = DashboardSummary::default();
        }
    }

    /// Set the category selection (`None` = "All") and rederive the views.
    pub fn select_category(&mut self, category: Option<String>) {
        if self.selection.category != category {
            self.selection.category = category;
            self.refilter();
        }
    }

    /// Set the type selection (`None` = "All") and rederive the views.
    pub fn select_type(&mut self, app_type: Option<String>) {
        if self.selection.app_type != app_type {
            self.selection.app_type = app_type;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AppCatalog, AppRecord};

    fn catalog() -> AppCatalog {
        let record = |category: &str, app_type: &str| AppRecord {
            app: String::new(),
            category: category.to_string(),
            rating: 4.0,
            reviews: None,
            installs: 10,
            app_type: app_type.to_string(),
            price: Some(0.0),
        };
        AppCatalog::from_records(
            vec![record("GAME", "Free"), record("TOOLS", "Paid")],
            0,
        )
    }

    #[test]
    fn set_catalog_starts_unfiltered() {
        let mut state = AppState::default();
        state.set_catalog(catalog());

        assert!(state.selection.is_all());
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.total_installs, 20);
    }

    #[test]
    fn selection_changes_rederive_the_views() {
        let mut state = AppState::default();
        state.set_catalog(catalog());

        state.select_category(Some("GAME".to_string()));
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.total_installs, 10);

        state.select_category(None);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }
}
