mod app;
mod color;
mod state;
mod ui;

use app::TireDashboardApp;
use clap::Parser;
use eframe::egui;
use tire_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();
    let config = DashboardConfig::parse();
    log::debug!("Configuration: {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([360.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tire Market Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(TireDashboardApp::new(&config)))),
    )
}
