use tire_dashboard::config::{DashboardConfig, LayoutMode};
use tire_dashboard::data::filter::{FilterOptions, FilterSelection};
use tire_dashboard::data::model::MarketDataset;
use tire_dashboard::data::views::{compute_views, ViewSet};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<MarketDataset>,

    /// Values offered by the year / country / tire size selectors.
    pub options: FilterOptions,

    /// Active key-column selection.
    pub selection: Option<FilterSelection>,

    /// Competitor chosen for the pattern breakdown; `None` means the top one.
    pub selected_competitor: Option<String>,

    /// Views for the current selection (cached).
    pub views: Option<ViewSet>,

    /// Stable brand colours for the whole dataset.
    pub color_map: ColorMap,

    /// Requested section layout.
    pub layout: LayoutMode,

    /// Width under which `LayoutMode::Auto` stacks sections.
    pub mobile_breakpoint: f32,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl AppState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            dataset: None,
            options: FilterOptions::default(),
            selection: None,
            selected_competitor: None,
            views: None,
            color_map: ColorMap::default(),
            layout: config.layout,
            mobile_breakpoint: config.mobile_breakpoint,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: MarketDataset) {
        self.options = FilterOptions::from_dataset(&dataset);
        self.selection = FilterSelection::first_available(&dataset);
        self.selected_competitor = None;
        self.color_map = ColorMap::new(dataset.brand_labels().iter().map(String::as_str));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.recompute();
    }

    /// Recompute `views` after a selection change.
    ///
    /// A chosen competitor survives only while it is still in the top-10
    /// table of the new selection.
    pub fn recompute(&mut self) {
        let (Some(ds), Some(sel)) = (&self.dataset, &self.selection) else {
            self.views = None;
            return;
        };
        let mut views = compute_views(ds, sel, self.selected_competitor.as_deref());
        if let Some(chosen) = &self.selected_competitor {
            if !views.competitor_choices().any(|c| c == chosen) {
                log::debug!("competitor {chosen} left the top 10, resetting selection");
                self.selected_competitor = None;
                views = compute_views(ds, sel, None);
            }
        }
        self.views = Some(views);
    }

    pub fn set_year(&mut self, year: i32) {
        if let Some(sel) = &mut self.selection {
            sel.year = year;
            self.recompute();
        }
    }

    pub fn set_country(&mut self, country: String) {
        if let Some(sel) = &mut self.selection {
            sel.country = country;
            self.recompute();
        }
    }

    pub fn set_tire_size(&mut self, tire_size: String) {
        if let Some(sel) = &mut self.selection {
            sel.tire_size = tire_size;
            self.recompute();
        }
    }

    /// Choose the competitor for the pattern breakdown.
    pub fn select_competitor(&mut self, competitor: String) {
        self.selected_competitor = Some(competitor);
        self.recompute();
    }

    /// Whether the stacked layout applies at `width` pixels.
    pub fn is_mobile(&self, width: f32) -> bool {
        self.layout.is_mobile(width, self.mobile_breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tire_dashboard::data::model::MarketRow;

    fn row(country: &str, competitor: &str, sales: f64) -> MarketRow {
        MarketRow {
            sales_year: 2024,
            country: country.to_string(),
            tire_size: "225/65R17".to_string(),
            total_industry_sales: 2_000_000.0,
            goodyear_sales: 500_000.0,
            som_of_brand: 0.25,
            competitor_brand: competitor.to_string(),
            competitor_brand_sales: sales,
            competitor_som: 0.1,
            competitor_pattern: "P1".to_string(),
            competitor_pattern_sales: sales / 2.0,
            brand_name: Some("Goodyear".to_string()),
            design_name: None,
            sales_price_usd: None,
            brand_type: "Tier 1".to_string(),
            lux_suv_carparc: 1.0,
            total_carparc: 10.0,
            lux_suv_ratio: 0.1,
            top_5_fitments: None,
        }
    }

    fn state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(MarketDataset::from_rows(vec![
            row("USA", "Michelin", 100.0),
            row("USA", "Bridgestone", 80.0),
            row("Mexico", "Bridgestone", 90.0),
        ]));
        state
    }

    #[test]
    fn test_set_dataset_selects_first_values() {
        let state = state();
        let views = state.views.as_ref().unwrap();
        assert_eq!(views.selection.country, "USA");
        assert_eq!(views.row_count, 2);
        assert_eq!(views.pattern_breakdown.competitor.as_deref(), Some("Michelin"));
    }

    #[test]
    fn test_competitor_kept_while_in_top_ten() {
        let mut state = state();
        state.select_competitor("Bridgestone".to_string());
        state.set_country("Mexico".to_string());
        assert_eq!(state.selected_competitor.as_deref(), Some("Bridgestone"));
        let views = state.views.as_ref().unwrap();
        assert_eq!(views.pattern_breakdown.competitor.as_deref(), Some("Bridgestone"));
    }

    #[test]
    fn test_competitor_reset_when_missing() {
        let mut state = state();
        state.select_competitor("Michelin".to_string());
        state.set_country("Mexico".to_string());
        assert_eq!(state.selected_competitor, None);
        let views = state.views.as_ref().unwrap();
        assert_eq!(views.pattern_breakdown.competitor.as_deref(), Some("Bridgestone"));
    }

    #[test]
    fn test_empty_selection_still_has_views() {
        let mut state = state();
        state.set_year(1999);
        let views = state.views.as_ref().unwrap();
        assert_eq!(views.row_count, 0);
        assert!(views.car_parc.is_none());
    }
}
