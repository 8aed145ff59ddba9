use std::f64::consts::TAU;

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use tire_dashboard::data::format;
use tire_dashboard::data::views::{
    BrandShare, CompetitorSales, DesignPrice, PatternSales, SalesComparison,
};

use crate::color::{ColorMap, COMPETITOR_GREEN, GOODYEAR_YELLOW, INDUSTRY_BLUE};

const CHART_HEIGHT: f32 = 280.0;
const PIE_SEGMENTS: usize = 96;

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

/// Bar chart with one category label per bar and the value printed above it.
fn labeled_bars(ui: &mut Ui, id: &str, y_label: &str, bars: Vec<(String, f64, String, Color32)>) {
    let labels: Vec<String> = bars.iter().map(|(l, ..)| l.clone()).collect();
    let chart_bars: Vec<Bar> = bars
        .iter()
        .enumerate()
        .map(|(i, (label, value, _, color))| {
            Bar::new(i as f64, *value)
                .name(label)
                .fill(*color)
                .width(0.6)
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .y_axis_label(y_label)
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart_bars));
            for (i, (_, value, text, _)) in bars.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, *value), RichText::new(text).small())
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

/// Industry total against own-brand sales.
pub fn sales_comparison_chart(ui: &mut Ui, view: &SalesComparison) {
    let colors = [INDUSTRY_BLUE, GOODYEAR_YELLOW];
    let bars = view
        .labeled()
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| {
            (
                label.to_string(),
                value,
                format::thousands(value, 0),
                color,
            )
        })
        .collect();
    labeled_bars(ui, "sales_comparison", "Sales Value", bars);
}

/// Top competitors by summed sales.
pub fn competitor_ranking_chart(ui: &mut Ui, ranking: &[CompetitorSales]) {
    let bars = ranking
        .iter()
        .map(|c| {
            (
                c.competitor.clone(),
                c.sales,
                format::thousands(c.sales, 0),
                COMPETITOR_GREEN,
            )
        })
        .collect();
    labeled_bars(ui, "competitor_ranking", "Competitor brand sales", bars);
}

/// One bar per priced design, coloured by brand.
pub fn price_chart(ui: &mut Ui, prices: &[DesignPrice], colors: &ColorMap) {
    let bars = prices
        .iter()
        .map(|p| {
            let color = p
                .brand
                .as_deref()
                .map(|b| colors.color_for(b))
                .unwrap_or(Color32::GRAY);
            (p.design.clone(), p.price_usd, p.price_display.clone(), color)
        })
        .collect();
    labeled_bars(ui, "price_by_design", "Sales Price in USD", bars);

    // Hover details the bars cannot carry: brand and brand type.
    for p in prices {
        ui.label(
            RichText::new(format!(
                "{}: {} ({}, {})",
                p.design,
                p.price_display,
                p.brand.as_deref().unwrap_or("unknown brand"),
                p.brand_type
            ))
            .small()
            .weak(),
        );
    }
}

// ---------------------------------------------------------------------------
// Pie charts
// ---------------------------------------------------------------------------

/// Draw `(label, value, color)` slices as polygons on a unit circle.
fn pie(ui: &mut Ui, id: &str, slices: Vec<(String, f64, Color32)>) {
    let total: f64 = slices.iter().map(|(_, v, _)| v).sum();
    if total <= 0.0 {
        ui.label("No data to chart.");
        return;
    }

    Plot::new(id)
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for (label, value, color) in slices {
                let sweep = value / total * TAU;
                let steps = ((sweep / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
                let mut points = vec![[0.0, 0.0]];
                points.extend((0..=steps).map(|s| {
                    let angle = start + sweep * s as f64 / steps as f64;
                    [angle.cos(), angle.sin()]
                }));
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .name(format!("{label} ({:.2}%)", value / total * 100.0))
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                start += sweep;
            }
        });
}

/// Brand row-count distribution.
pub fn brand_distribution_pie(ui: &mut Ui, shares: &[BrandShare], colors: &ColorMap) {
    let slices = shares
        .iter()
        .map(|s| (s.brand.clone(), s.percent, colors.color_for(&s.brand)))
        .collect();
    pie(ui, "brand_distribution", slices);
}

/// Pattern sales of one competitor.
pub fn pattern_pie(ui: &mut Ui, patterns: &[PatternSales], colors: &ColorMap) {
    let slices = patterns
        .iter()
        .map(|p| (p.pattern.clone(), p.sales, colors.color_for(&p.pattern)))
        .collect();
    pie(ui, "pattern_breakdown", slices);
}
