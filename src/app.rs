use eframe::egui;

use tire_dashboard::config::DashboardConfig;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TireDashboardApp {
    pub state: AppState,
}

impl TireDashboardApp {
    /// Build the app, loading `config.data` right away when given.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::from_config(config);
        if let Some(path) = &config.data {
            panels::load_into(&mut state, path);
        }
        Self { state }
    }
}

impl eframe::App for TireDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view settings + filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        let mobile = self.state.is_mobile(ctx.screen_rect().width());
        let mut chosen = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(views) = &self.state.views else {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a file to view the market  (File → Open…)");
                });
                return;
            };
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    chosen = dashboard::dashboard(ui, views, &self.state.color_map, mobile);
                });
        });

        if let Some(competitor) = chosen {
            self.state.select_competitor(competitor);
        }
    }
}
