use eframe::egui::{self, Color32, Frame, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use tire_dashboard::data::views::{CarParcSnapshot, MarketShare, TopCompetitorRow};

use crate::color::HIGHLIGHT_PURPLE;

// ---------------------------------------------------------------------------
// Card frame
// ---------------------------------------------------------------------------

fn card(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(10.0)
        .inner_margin(12.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).strong().size(18.0));
            ui.add_space(6.0);
            add_contents(ui);
        });
}

fn data_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            ui.label(RichText::new(value).strong().color(HIGHLIGHT_PURPLE));
        });
    });
}

/// Placeholder for a view with nothing to show.
pub fn no_data(ui: &mut Ui, message: &str) {
    ui.label(RichText::new(format!("⚠ {message}")).color(Color32::from_rgb(0xe0, 0xa0, 0x00)));
}

// ---------------------------------------------------------------------------
// Scalar cards
// ---------------------------------------------------------------------------

pub fn market_share_card(ui: &mut Ui, share: Option<&MarketShare>) {
    card(ui, "Market Share (%)", |ui: &mut Ui| match share {
        Some(s) => {
            ui.label(RichText::new(&s.display).heading().color(HIGHLIGHT_PURPLE))
                .on_hover_text("Calculated based on SOM of the selected brand.");
        }
        None => no_data(ui, "No market share data for the selected filters."),
    });
}

pub fn top_competitor_card(ui: &mut Ui, top: Option<&TopCompetitorRow>) {
    let Some(top) = top else {
        return;
    };
    card(ui, "🏆 Top Competitor", |ui: &mut Ui| {
        data_row(ui, "Brand", &top.competitor);
        data_row(ui, "Top Competitor SOM (%)", &top.share_display);
    });
}

pub fn car_parc_card(ui: &mut Ui, parc: Option<&CarParcSnapshot>) {
    let Some(parc) = parc else {
        no_data(ui, "No car parc data available for the selected filters.");
        return;
    };
    card(ui, "🔹 Carparc Data", |ui: &mut Ui| {
        data_row(ui, "LUX SUV Carparc", &parc.lux_suv_carparc_display);
        ui.separator();
        data_row(ui, "Total Carparc", &parc.total_carparc_display);
        ui.separator();
        data_row(ui, "LUX SUV Ratio", &parc.lux_suv_ratio_display);
    });
}

pub fn fitments_list(ui: &mut Ui, fitments: &[String]) {
    if fitments.is_empty() {
        no_data(ui, "No fitment data for the selected filters.");
        return;
    }
    for fitment in fitments {
        ui.label(format!("✅ {fitment}"));
    }
}

// ---------------------------------------------------------------------------
// Top-10 table
// ---------------------------------------------------------------------------

pub fn top_competitors_table(ui: &mut Ui, rows: &[TopCompetitorRow]) {
    if rows.is_empty() {
        no_data(ui, "No competitor data for the selected filters.");
        return;
    }
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(32.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(100.0))
        .header(22.0, |mut header| {
            for title in [
                "#",
                "Competitor brand",
                "Competitor brand sales",
                "Competitor market share",
            ] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for r in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(r.rank.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.competitor);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.sales_display);
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(&r.share_display);
                    });
                });
            }
        });
}
