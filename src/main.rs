mod app;
mod color;
mod config;
mod data;
mod state;
mod store;
mod ui;

use anyhow::Context;
use app::QuakeExplorerApp;
use clap::Parser;
use eframe::egui;

use config::Config;
use state::AppState;
use store::DataStore;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = Config::parse();

    // A failed load is fatal for the run.
    let store = DataStore::open(&config.data)
        .with_context(|| format!("loading {}", config.data.display()))?;

    let mut state = AppState::new(store);
    if let Some(year) = config.year {
        if let Err(e) = state.set_year(year) {
            log::warn!("Ignoring --year: {e}");
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Earthquake & Tsunami Data Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(QuakeExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
