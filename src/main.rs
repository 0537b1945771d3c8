mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use app::LaunchDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::DashboardState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::default();

    // The dashboard does not start without its dataset.
    let dataset = match data::loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))
    {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            return Err(e);
        }
    };

    let state = DashboardState::new(Arc::new(dataset), config.slider.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(LaunchDashApp::new(state, &title)))),
    )
    .map_err(|e| anyhow!("UI error: {e}"))
}
