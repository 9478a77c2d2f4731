mod app;
mod color;
mod config;
mod data;
mod explore;
mod state;
mod ui;

use std::path::{Path, PathBuf};

use app::DeckhandApp;
use config::ExploreConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Thin bootstrap: manifest path (arg 1, default sample location) and an
    // optional config file (arg 2). Everything is resolved once, up front.
    let args: Vec<String> = std::env::args().collect();
    let manifest = PathBuf::from(args.get(1).map_or("data/passengers.csv", String::as_str));
    let config = match args.get(2) {
        Some(path) => match ExploreConfig::load(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config {path}: {e:#}; using defaults");
                ExploreConfig::default()
            }
        },
        None => ExploreConfig::default(),
    };

    // The dataset is loaded exactly once; it is read-only afterwards.
    let loaded = data::loader::load_file(&manifest);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Deckhand – Passenger Explorer",
        options,
        Box::new(move |_cc| {
            let mut state = AppState::new(config);
            match loaded {
                Ok(dataset) => {
                    log::info!(
                        "Loaded {} passengers with columns {:?} from {}",
                        dataset.len(),
                        dataset.column_names().collect::<Vec<_>>(),
                        manifest.display()
                    );
                    state.set_dataset(dataset);
                }
                Err(e) => {
                    log::error!("Failed to load {}: {e:#}", manifest.display());
                    state.status_message = Some(format!("Error: {e:#}"));
                }
            }
            Ok(Box::new(DeckhandApp { state }))
        }),
    )
}
