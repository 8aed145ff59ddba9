use eframe::egui::{self, RichText, Ui};

use tire_dashboard::data::views::ViewSet;

use super::{cards, plot};
use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Sections – each draws one view, identically in both layouts
// ---------------------------------------------------------------------------

fn section_heading(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).heading());
    ui.add_space(4.0);
}

fn sales_section(ui: &mut Ui, views: &ViewSet) {
    section_heading(ui, "📊 Industry & Goodyear Sales");
    match &views.sales_comparison {
        Some(sales) => plot::sales_comparison_chart(ui, sales),
        None => cards::no_data(ui, "No sales data for the selected filters."),
    }
}

fn market_share_section(ui: &mut Ui, views: &ViewSet) {
    section_heading(ui, "📊 Market Share of Goodyear");
    cards::market_share_card(ui, views.market_share.as_ref());
    ui.add_space(8.0);
    cards::top_competitor_card(ui, views.top_competitor());
}

fn ranking_section(ui: &mut Ui, views: &ViewSet) {
    section_heading(ui, "🏆 Competitor Sales Comparison");
    if views.competitor_ranking.is_empty() {
        cards::no_data(ui, "No competitor data for the selected filters.");
    } else {
        plot::competitor_ranking_chart(ui, &views.competitor_ranking);
    }
}

fn brand_section(ui: &mut Ui, views: &ViewSet, colors: &ColorMap) {
    section_heading(ui, "📊 Market Share Distribution");
    if views.brand_distribution.is_empty() {
        cards::no_data(ui, "No brand data for the selected filters.");
    } else {
        plot::brand_distribution_pie(ui, &views.brand_distribution, colors);
    }
}

fn table_section(ui: &mut Ui, views: &ViewSet) {
    section_heading(ui, "🥇 Top 10 Competitors");
    cards::top_competitors_table(ui, &views.top_competitors);
}

/// Competitor selector plus pattern pie. Returns a newly chosen competitor.
fn pattern_section(ui: &mut Ui, views: &ViewSet, colors: &ColorMap) -> Option<String> {
    section_heading(ui, "📊 Competitor Pattern Analysis");
    let breakdown = &views.pattern_breakdown;
    let Some(current) = breakdown.competitor.as_deref() else {
        cards::no_data(ui, "No competitors to analyse for the selected filters.");
        return None;
    };

    let mut chosen = None;
    egui::ComboBox::from_label("Select Competitor")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            for name in views.competitor_choices() {
                if ui.selectable_label(name == current, name).clicked() && name != current {
                    chosen = Some(name.to_string());
                }
            }
        });

    if breakdown.is_empty() {
        cards::no_data(ui, "No pattern data available for the selected competitor.");
    } else {
        ui.label(format!("Sales Distribution by Pattern for {current}"));
        plot::pattern_pie(ui, &breakdown.patterns, colors);
    }
    chosen
}

fn price_section(ui: &mut Ui, views: &ViewSet, colors: &ColorMap) {
    section_heading(ui, "💰 Price Comparison by Design");
    if views.price_by_design.is_empty() {
        cards::no_data(ui, "No data available for the selected filters.");
    } else {
        plot::price_chart(ui, &views.price_by_design, colors);
    }
}

fn car_parc_section(ui: &mut Ui, views: &ViewSet) {
    section_heading(ui, "🚘 Carparc Data");
    cards::car_parc_card(ui, views.car_parc.as_ref());
}

fn fitments_section(ui: &mut Ui, views: &ViewSet) {
    section_heading(ui, "🛞 Top 5 Fitments");
    cards::fitments_list(ui, &views.top_fitments);
}

// ---------------------------------------------------------------------------
// Layouts
// ---------------------------------------------------------------------------

/// Render the whole dashboard. Layout only decides placement; both branches
/// draw the same sections from the same views.
///
/// Returns the competitor picked in the pattern selector, if it changed.
pub fn dashboard(ui: &mut Ui, views: &ViewSet, colors: &ColorMap, mobile: bool) -> Option<String> {
    ui.heading("🚗 Tire Market Dashboard");
    ui.label(RichText::new("📊 Market insights and competitor analysis").strong());
    ui.label(
        RichText::new(format!(
            "{} · {} · {} · {} rows",
            views.selection.year,
            views.selection.country,
            views.selection.tire_size,
            views.row_count
        ))
        .weak(),
    );
    ui.separator();

    if mobile {
        stacked(ui, views, colors)
    } else {
        columns(ui, views, colors)
    }
}

fn stacked(ui: &mut Ui, views: &ViewSet, colors: &ColorMap) -> Option<String> {
    sales_section(ui, views);
    market_share_section(ui, views);
    ranking_section(ui, views);
    brand_section(ui, views, colors);
    table_section(ui, views);
    let chosen = pattern_section(ui, views, colors);
    price_section(ui, views, colors);
    car_parc_section(ui, views);
    fitments_section(ui, views);
    chosen
}

fn columns(ui: &mut Ui, views: &ViewSet, colors: &ColorMap) -> Option<String> {
    let mut chosen = None;

    ui.columns(2, |cols| {
        sales_section(&mut cols[0], views);
        market_share_section(&mut cols[1], views);
    });
    ui.columns(2, |cols| {
        ranking_section(&mut cols[0], views);
        brand_section(&mut cols[1], views, colors);
    });
    table_section(ui, views);
    ui.columns(2, |cols| {
        chosen = pattern_section(&mut cols[0], views, colors);
        price_section(&mut cols[1], views, colors);
    });
    ui.columns(2, |cols| {
        car_parc_section(&mut cols[0], views);
        fitments_section(&mut cols[1], views);
    });

    ui.separator();
    chosen
}
