mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use app::PlayDashApp;
use eframe::egui;
use state::AppState;

/// Dataset path used when none is given on the command line.
const DEFAULT_DATASET: &str = "data/googleplaystore.csv";

fn main() -> Result<()> {
    env_logger::init();

    let state = initial_state(std::env::args().nth(1).map(PathBuf::from))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Play Store Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(PlayDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}

/// Build the startup state. An explicitly requested dataset must load or the
/// program aborts; the default path is best-effort — if it is absent the app
/// starts empty and the user loads a file via File → Open.
fn initial_state(requested: Option<PathBuf>) -> Result<AppState> {
    let mut state = AppState::default();

    match requested {
        Some(path) => {
            let catalog = data::loader::load_csv(&path)
                .with_context(|| format!("loading dataset {}", path.display()))?;
            state.set_catalog(catalog);
        }
        None if Path::new(DEFAULT_DATASET).exists() => {
            match data::loader::load_csv(Path::new(DEFAULT_DATASET)) {
                Ok(catalog) => state.set_catalog(catalog),
                Err(e) => {
                    log::error!("Failed to load {DEFAULT_DATASET}: {e}");
                    state.status_message = Some(format!("Error: {e}"));
                }
            }
        }
        None => {
            log::info!("No dataset at {DEFAULT_DATASET}; starting empty");
        }
    }

    Ok(state)
}
