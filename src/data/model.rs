use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Column names as they appear in the source files
// ---------------------------------------------------------------------------

pub const SALES_YEAR: &str = "SALES_YEAR";
pub const COUNTRY_OR_TERRITORY: &str = "COUNTRY_OR_TERRITORY";
pub const TIRE_SIZE: &str = "TIRE_SIZE";
pub const TOTAL_INDUSTRY_SALES: &str = "TOTAL_INDUSTRY_SALES";
pub const GOODYEAR_SALES: &str = "GOODYEAR_SALES";
pub const SOM_OF_BRAND: &str = "SOM_OF_BRAND";
pub const COMPETITOR_BRAND: &str = "COMPETITOR_BRAND";
pub const COMPETITOR_BRAND_SALES: &str = "COMPETITOR_BRAND_SALES";
pub const COMPETITOR_SOM_OF_BRAND: &str = "COMPETITOR_SOM_OF_BRAND";
pub const COMPETITOR_PATTERN: &str = "COMPETITOR_PATTERN";
pub const COMPETITOR_PATTERN_SALES: &str = "COMPETITOR_PATTERN_SALES";
pub const BRAND_NAME: &str = "BRAND_NAME";
pub const DESIGN_NAME: &str = "DESIGN_NAME";
pub const SALES_PRICE_IN_USD: &str = "SALES_PRICE_IN_USD";
pub const BRAND_TYPE: &str = "BRAND_TYPE";
pub const LUX_SUV_CARPARC: &str = "LUX_SUV_CARPARC";
pub const TOTAL_CARPARC: &str = "TOTAL_CARPARC";
pub const LUX_SUV_RATIO: &str = "LUX_SUV_RATIO";
pub const TOP_5_FITMENTS: &str = "TOP_5_FITMENTS";

/// Every column a dataset file must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 19] = [
    SALES_YEAR,
    COUNTRY_OR_TERRITORY,
    TIRE_SIZE,
    TOTAL_INDUSTRY_SALES,
    GOODYEAR_SALES,
    SOM_OF_BRAND,
    COMPETITOR_BRAND,
    COMPETITOR_BRAND_SALES,
    COMPETITOR_SOM_OF_BRAND,
    COMPETITOR_PATTERN,
    COMPETITOR_PATTERN_SALES,
    BRAND_NAME,
    DESIGN_NAME,
    SALES_PRICE_IN_USD,
    BRAND_TYPE,
    LUX_SUV_CARPARC,
    TOTAL_CARPARC,
    LUX_SUV_RATIO,
    TOP_5_FITMENTS,
];

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// A dataset that does not match the market-row schema.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: {column} = {value} is outside [0, 1]")]
    FractionOutOfRange {
        row: usize,
        column: &'static str,
        value: f64,
    },

    #[error("row {row}: {column} is not a finite number")]
    NonFiniteValue { row: usize, column: &'static str },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("dataset contains no rows")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// MarketRow – one record of the dataset
// ---------------------------------------------------------------------------

/// One dataset entry: a (year, country, tire size) market fact joined with a
/// competitor, one of its tread patterns, a priced design and the car parc.
///
/// Per-brand and per-competitor facts repeat across rows, so aggregations
/// must deduplicate before summing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    #[serde(rename = "SALES_YEAR")]
    pub sales_year: i32,
    #[serde(rename = "COUNTRY_OR_TERRITORY")]
    pub country: String,
    #[serde(rename = "TIRE_SIZE")]
    pub tire_size: String,
    #[serde(rename = "TOTAL_INDUSTRY_SALES")]
    pub total_industry_sales: f64,
    #[serde(rename = "GOODYEAR_SALES")]
    pub goodyear_sales: f64,
    /// Fraction in [0, 1].
    #[serde(rename = "SOM_OF_BRAND")]
    pub som_of_brand: f64,
    #[serde(rename = "COMPETITOR_BRAND")]
    pub competitor_brand: String,
    #[serde(rename = "COMPETITOR_BRAND_SALES")]
    pub competitor_brand_sales: f64,
    /// Fraction in [0, 1].
    #[serde(rename = "COMPETITOR_SOM_OF_BRAND")]
    pub competitor_som: f64,
    #[serde(rename = "COMPETITOR_PATTERN")]
    pub competitor_pattern: String,
    #[serde(rename = "COMPETITOR_PATTERN_SALES")]
    pub competitor_pattern_sales: f64,
    #[serde(rename = "BRAND_NAME", default)]
    pub brand_name: Option<String>,
    #[serde(rename = "DESIGN_NAME", default)]
    pub design_name: Option<String>,
    #[serde(rename = "SALES_PRICE_IN_USD", default)]
    pub sales_price_usd: Option<f64>,
    #[serde(rename = "BRAND_TYPE")]
    pub brand_type: String,
    #[serde(rename = "LUX_SUV_CARPARC")]
    pub lux_suv_carparc: f64,
    #[serde(rename = "TOTAL_CARPARC")]
    pub total_carparc: f64,
    /// Fraction in [0, 1].
    #[serde(rename = "LUX_SUV_RATIO")]
    pub lux_suv_ratio: f64,
    #[serde(rename = "TOP_5_FITMENTS", default)]
    pub top_5_fitments: Option<String>,
}

impl MarketRow {
    /// Check the numeric invariants of a freshly parsed row.
    ///
    /// `row` is the zero-based record index used in error messages.
    pub fn validate(&self, row: usize) -> Result<(), SchemaError> {
        let finite = [
            (TOTAL_INDUSTRY_SALES, self.total_industry_sales),
            (GOODYEAR_SALES, self.goodyear_sales),
            (COMPETITOR_BRAND_SALES, self.competitor_brand_sales),
            (COMPETITOR_PATTERN_SALES, self.competitor_pattern_sales),
            (LUX_SUV_CARPARC, self.lux_suv_carparc),
            (TOTAL_CARPARC, self.total_carparc),
        ];
        for (column, value) in finite {
            if !value.is_finite() {
                return Err(SchemaError::NonFiniteValue { row, column });
            }
        }
        if let Some(price) = self.sales_price_usd {
            if !price.is_finite() {
                return Err(SchemaError::NonFiniteValue {
                    row,
                    column: SALES_PRICE_IN_USD,
                });
            }
        }

        let fractions = [
            (SOM_OF_BRAND, self.som_of_brand),
            (COMPETITOR_SOM_OF_BRAND, self.competitor_som),
            (LUX_SUV_RATIO, self.lux_suv_ratio),
        ];
        for (column, value) in fractions {
            if !value.is_finite() {
                return Err(SchemaError::NonFiniteValue { row, column });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(SchemaError::FractionOutOfRange { row, column, value });
            }
        }
        Ok(())
    }

    /// Blank strings in optional text columns and NaN prices mean "missing".
    pub fn normalize(mut self) -> Self {
        fn blank_to_none(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        self.brand_name = blank_to_none(self.brand_name);
        self.design_name = blank_to_none(self.design_name);
        self.top_5_fitments = blank_to_none(self.top_5_fitments);
        self.sales_price_usd = self.sales_price_usd.filter(|p| !p.is_nan());
        self
    }
}

/// Hashable identity of an `f64` for deduplication (`-0.0` folds onto `0.0`).
pub fn float_key(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

/// Keep the first occurrence of each key, preserving source order.
pub fn distinct_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

// ---------------------------------------------------------------------------
// MarketDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter values.
#[derive(Debug, Clone, Default)]
pub struct MarketDataset {
    /// All rows, in file order.
    pub rows: Vec<MarketRow>,
    /// Distinct `SALES_YEAR` values in first-appearance order.
    pub years: Vec<i32>,
    /// Distinct `COUNTRY_OR_TERRITORY` values in first-appearance order.
    pub countries: Vec<String>,
    /// Distinct `TIRE_SIZE` values in first-appearance order.
    pub tire_sizes: Vec<String>,
}

impl MarketDataset {
    /// Build the filter value indices from the loaded rows.
    pub fn from_rows(rows: Vec<MarketRow>) -> Self {
        let years = distinct_by(rows.iter().map(|r| r.sales_year), |y| *y);
        let countries = distinct_by(rows.iter().map(|r| r.country.clone()), |c| c.clone());
        let tire_sizes = distinct_by(rows.iter().map(|r| r.tire_size.clone()), |t| t.clone());
        MarketDataset {
            rows,
            years,
            countries,
            tire_sizes,
        }
    }

    /// Every brand label that may appear in a chart (own brands and
    /// competitors), sorted and deduplicated.
    pub fn brand_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .rows
            .iter()
            .flat_map(|r| {
                std::iter::once(r.competitor_brand.clone()).chain(r.brand_name.clone())
            })
            .collect();
        labels.sort();
        labels.dedup();
        labels
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
