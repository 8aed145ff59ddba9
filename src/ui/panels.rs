use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use tire_dashboard::config::LayoutMode;
use tire_dashboard::data::{export, loader};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view settings and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("📱 View Settings");
    ui.separator();
    for mode in LayoutMode::ALL {
        ui.radio_value(&mut state.layout, mode, mode.to_string())
            .on_hover_text("Choose how you want to view the dashboard");
    }
    ui.add_space(8.0);

    ui.heading("🔍 Filters");
    ui.separator();

    let Some(selection) = state.selection.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the combo boxes.
    let options = state.options.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("📅 Select Year");
            egui::ComboBox::from_id_salt("year")
                .selected_text(selection.year.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    for &year in &options.years {
                        if ui.selectable_label(year == selection.year, year.to_string()).clicked() {
                            state.set_year(year);
                        }
                    }
                });
            ui.add_space(6.0);

            ui.strong("🌍 Select Country");
            egui::ComboBox::from_id_salt("country")
                .selected_text(&selection.country)
                .show_ui(ui, |ui: &mut Ui| {
                    for country in &options.countries {
                        if ui.selectable_label(*country == selection.country, country).clicked() {
                            state.set_country(country.clone());
                        }
                    }
                });
            ui.add_space(6.0);

            ui.strong("📏 Select Tire Size");
            egui::ComboBox::from_id_salt("tire_size")
                .selected_text(&selection.tire_size)
                .show_ui(ui, |ui: &mut Ui| {
                    for size in &options.tire_sizes {
                        if ui.selectable_label(*size == selection.tire_size, size).clicked() {
                            state.set_tire_size(size.clone());
                        }
                    }
                });
        });
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
            let can_export = state.views.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export views as JSON…"))
                .clicked()
            {
                export_views_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(views)) = (&state.dataset, &state.views) {
            ui.label(format!(
                "{} rows loaded, {} in selection",
                ds.len(),
                views.row_count
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open market data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        load_into(state, &path);
    }
}

/// Load `path` into the state, reporting failures in the status bar.
pub fn load_into(state: &mut AppState, path: &std::path::Path) {
    match loader::load_file(path) {
        Ok(dataset) => state.set_dataset(dataset),
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn export_views_dialog(state: &mut AppState) {
    let Some(views) = &state.views else {
        return;
    };
    let file = rfd::FileDialog::new()
        .set_title("Export dashboard views")
        .set_file_name("views.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = export::write_views_json(views, &path) {
            log::error!("Failed to export views: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_into_reports_failure() {
        let mut state = AppState::default();
        load_into(&mut state, std::path::Path::new("does-not-exist.csv"));
        assert!(state.dataset.is_none());
        assert!(state.views.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.starts_with("Error: loading does-not-exist.csv"));
    }
}
