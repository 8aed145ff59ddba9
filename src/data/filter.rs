use serde::{Deserialize, Serialize};

use super::model::{MarketDataset, MarketRow};

// ---------------------------------------------------------------------------
// Filter selection: one value per key column
// ---------------------------------------------------------------------------

/// The active (year, country, tire size) selection.
///
/// Values are expected to come from [`FilterOptions`]; a value that is not in
/// the dataset simply selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub year: i32,
    pub country: String,
    pub tire_size: String,
}

impl FilterSelection {
    pub fn new(year: i32, country: impl Into<String>, tire_size: impl Into<String>) -> Self {
        Self {
            year,
            country: country.into(),
            tire_size: tire_size.into(),
        }
    }

    /// Default selection: the first distinct value of each key column.
    /// `None` for an empty dataset.
    pub fn first_available(dataset: &MarketDataset) -> Option<Self> {
        Some(Self {
            year: *dataset.years.first()?,
            country: dataset.countries.first()?.clone(),
            tire_size: dataset.tire_sizes.first()?.clone(),
        })
    }

    /// Exact equality on all three key columns.
    pub fn matches(&self, row: &MarketRow) -> bool {
        row.sales_year == self.year
            && row.country == self.country
            && row.tire_size == self.tire_size
    }
}

/// Values offered by the three selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub years: Vec<i32>,
    pub countries: Vec<String>,
    pub tire_sizes: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &MarketDataset) -> Self {
        Self {
            years: dataset.years.clone(),
            countries: dataset.countries.clone(),
            tire_sizes: dataset.tire_sizes.clone(),
        }
    }
}

/// The filtered slice: rows matching the selection, in file order. May be empty.
pub fn filtered_rows<'a>(
    dataset: &'a MarketDataset,
    selection: &FilterSelection,
) -> Vec<&'a MarketRow> {
    dataset.rows.iter().filter(|row| selection.matches(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::row;

    fn dataset() -> MarketDataset {
        let a = row();
        let mut b = row();
        b.country = "Mexico".to_string();
        let mut c = row();
        c.sales_year = 2025;
        let mut d = row();
        d.tire_size = "265/70R17".to_string();
        let e = row();
        MarketDataset::from_rows(vec![a, b, c, d, e])
    }

    #[test]
    fn test_filtered_rows_exact_match() {
        let ds = dataset();
        let sel = FilterSelection::new(2024, "USA", "225/65R17");
        let rows = filtered_rows(&ds, &sel);
        assert_eq!(rows.len(), 2);
        assert!(std::ptr::eq(rows[0], &ds.rows[0]));
        assert!(std::ptr::eq(rows[1], &ds.rows[4]));
    }

    #[test]
    fn test_unknown_key_selects_nothing() {
        let ds = dataset();
        let sel = FilterSelection::new(1999, "USA", "225/65R17");
        assert!(filtered_rows(&ds, &sel).is_empty());
        let sel = FilterSelection::new(2024, "Atlantis", "225/65R17");
        assert!(filtered_rows(&ds, &sel).is_empty());
    }

    #[test]
    fn test_first_available() {
        let ds = dataset();
        let sel = FilterSelection::first_available(&ds);
        assert_eq!(sel, Some(FilterSelection::new(2024, "USA", "225/65R17")));
        assert_eq!(FilterSelection::first_available(&MarketDataset::default()), None);
    }

    #[test]
    fn test_options_mirror_dataset() {
        let ds = dataset();
        let opts = FilterOptions::from_dataset(&ds);
        assert_eq!(opts.years, vec![2024, 2025]);
        assert_eq!(opts.countries, vec!["USA".to_string(), "Mexico".to_string()]);
        assert_eq!(
            opts.tire_sizes,
            vec!["225/65R17".to_string(), "265/70R17".to_string()]
        );
    }
}
