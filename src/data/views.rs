//! The filter-and-aggregate pipeline: (dataset, selection) → [`ViewSet`].
//!
//! Every view reads only the filtered slice. Empty slices and missing fields
//! produce empty or `None` views, never errors.

use std::collections::HashMap;

use serde::Serialize;

use super::filter::{filtered_rows, FilterSelection};
use super::format;
use super::model::{distinct_by, float_key, MarketDataset, MarketRow};

/// How many competitors the ranking and the table keep.
pub const TOP_COMPETITORS: usize = 10;
/// How many fitments are listed.
pub const TOP_FITMENTS: usize = 5;

pub const TOTAL_INDUSTRY_SALES_LABEL: &str = "Total Industry Sales";
pub const GOODYEAR_SALES_LABEL: &str = "Goodyear Sales";

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// View 1: industry total against own-brand sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesComparison {
    pub total_industry_sales: f64,
    pub goodyear_sales: f64,
    /// Distinct (total, goodyear) pairs seen in the slice; anything above 1
    /// is a data anomaly and only the first pair is reported.
    pub distinct_pairs: usize,
}

impl SalesComparison {
    /// The two labelled bars, industry first.
    pub fn labeled(&self) -> [(&'static str, f64); 2] {
        [
            (TOTAL_INDUSTRY_SALES_LABEL, self.total_industry_sales),
            (GOODYEAR_SALES_LABEL, self.goodyear_sales),
        ]
    }
}

/// View 2: mean distinct share of market, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketShare {
    pub percent: f64,
    pub display: String,
}

/// View 3: one bar of the competitor ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorSales {
    pub competitor: String,
    pub sales: f64,
}

/// View 4: one slice of the brand pie (row-count based).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandShare {
    pub brand: String,
    pub count: usize,
    pub percent: f64,
}

/// View 5: one row of the top-10 competitor table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCompetitorRow {
    /// 1-based rank.
    pub rank: usize,
    pub competitor: String,
    pub sales: f64,
    /// Mean share as a [0, 1] fraction.
    pub share: f64,
    pub sales_display: String,
    pub share_display: String,
}

/// View 6 entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSales {
    pub pattern: String,
    pub sales: f64,
    /// This pattern's part of the listed patterns' total, in percent.
    pub percent_of_total: f64,
}

/// View 6: tread-pattern sales of one competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatternBreakdown {
    /// The competitor the breakdown was computed for; `None` when no
    /// competitor was given and the top-10 table is empty.
    pub competitor: Option<String>,
    pub patterns: Vec<PatternSales>,
}

impl PatternBreakdown {
    /// No pattern data for the competitor.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// View 7 entry: one priced design.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignPrice {
    pub design: String,
    pub price_usd: f64,
    pub price_display: String,
    pub brand: Option<String>,
    pub brand_type: String,
}

/// View 8: car parc figures for the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarParcSnapshot {
    pub lux_suv_carparc: f64,
    pub total_carparc: f64,
    /// Fraction in [0, 1].
    pub lux_suv_ratio: f64,
    pub lux_suv_carparc_display: String,
    pub total_carparc_display: String,
    pub lux_suv_ratio_display: String,
    /// Distinct triples seen in the slice; only the first is reported.
    pub distinct_snapshots: usize,
}

/// Everything the dashboard renders for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSet {
    pub selection: FilterSelection,
    /// Size of the filtered slice.
    pub row_count: usize,
    pub sales_comparison: Option<SalesComparison>,
    pub market_share: Option<MarketShare>,
    pub competitor_ranking: Vec<CompetitorSales>,
    pub brand_distribution: Vec<BrandShare>,
    pub top_competitors: Vec<TopCompetitorRow>,
    pub pattern_breakdown: PatternBreakdown,
    pub price_by_design: Vec<DesignPrice>,
    pub car_parc: Option<CarParcSnapshot>,
    pub top_fitments: Vec<String>,
}

impl ViewSet {
    /// Row 1 of the top-10 table.
    pub fn top_competitor(&self) -> Option<&TopCompetitorRow> {
        self.top_competitors.first()
    }

    /// Values the competitor selector may offer.
    pub fn competitor_choices(&self) -> impl Iterator<Item = &str> {
        self.top_competitors.iter().map(|r| r.competitor.as_str())
    }
}

// ---------------------------------------------------------------------------
// Pipeline entry-point
// ---------------------------------------------------------------------------

/// Slice `dataset` by `selection` and derive every view from the slice.
///
/// `selected_competitor` drives the pattern breakdown; when `None` it falls
/// back to the top row of the competitor table.
pub fn compute_views(
    dataset: &MarketDataset,
    selection: &FilterSelection,
    selected_competitor: Option<&str>,
) -> ViewSet {
    let slice = filtered_rows(dataset, selection);
    log::debug!(
        "computing views for {} / {} / {}: {} rows",
        selection.year,
        selection.country,
        selection.tire_size,
        slice.len()
    );

    let top_competitors = top_competitor_table(&slice);
    let competitor = selected_competitor
        .map(str::to_string)
        .or_else(|| top_competitors.first().map(|r| r.competitor.clone()));
    let pattern_breakdown = match competitor {
        Some(name) => pattern_breakdown(&slice, &name),
        None => PatternBreakdown::default(),
    };

    ViewSet {
        selection: selection.clone(),
        row_count: slice.len(),
        sales_comparison: sales_comparison(&slice),
        market_share: market_share(&slice),
        competitor_ranking: competitor_ranking(&slice),
        brand_distribution: brand_distribution(&slice),
        top_competitors,
        pattern_breakdown,
        price_by_design: price_by_design(&slice),
        car_parc: car_parc(&slice),
        top_fitments: top_fitments(&slice),
    }
}

// ---------------------------------------------------------------------------
// Individual views
// ---------------------------------------------------------------------------

/// View 1. First distinct (total, goodyear) pair of the slice.
pub fn sales_comparison(slice: &[&MarketRow]) -> Option<SalesComparison> {
    let pairs = distinct_by(
        slice
            .iter()
            .map(|r| (r.total_industry_sales, r.goodyear_sales)),
        |(t, g)| (float_key(*t), float_key(*g)),
    );
    let &(total, goodyear) = pairs.first()?;
    if pairs.len() > 1 {
        log::warn!(
            "{} distinct industry/goodyear sales pairs in one selection, reporting the first",
            pairs.len()
        );
    }
    Some(SalesComparison {
        total_industry_sales: total,
        goodyear_sales: goodyear,
        distinct_pairs: pairs.len(),
    })
}

/// View 2. Mean of the distinct share-of-market values, ×100.
pub fn market_share(slice: &[&MarketRow]) -> Option<MarketShare> {
    let shares = distinct_by(slice.iter().map(|r| r.som_of_brand), |s| float_key(*s));
    if shares.is_empty() {
        return None;
    }
    let mean = shares.iter().sum::<f64>() / shares.len() as f64;
    let percent = mean * 100.0;
    Some(MarketShare {
        percent,
        display: format::percent(percent),
    })
}

/// View 3. Distinct (competitor, sales) pairs summed per competitor, top 10
/// descending. Ties keep first-appearance order.
pub fn competitor_ranking(slice: &[&MarketRow]) -> Vec<CompetitorSales> {
    let pairs = distinct_by(
        slice
            .iter()
            .map(|r| (r.competitor_brand.as_str(), r.competitor_brand_sales)),
        |(c, s)| (*c, float_key(*s)),
    );

    let mut ranking: Vec<CompetitorSales> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (competitor, sales) in pairs {
        match index.get(competitor) {
            Some(&i) => ranking[i].sales += sales,
            None => {
                index.insert(competitor, ranking.len());
                ranking.push(CompetitorSales {
                    competitor: competitor.to_string(),
                    sales,
                });
            }
        }
    }

    ranking.sort_by(|a, b| b.sales.total_cmp(&a.sales));
    ranking.truncate(TOP_COMPETITORS);
    ranking
}

/// View 4. Row counts per non-null brand name as a percentage of all
/// non-null rows. Counts rows, not sales; most frequent first.
pub fn brand_distribution(slice: &[&MarketRow]) -> Vec<BrandShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for brand in slice.iter().filter_map(|r| r.brand_name.as_deref()) {
        match index.get(brand) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(brand, counts.len());
                counts.push((brand, 1));
            }
        }
    }

    let total: usize = counts.iter().map(|(_, c)| c).sum();
    counts.sort_by_key(|(_, c)| std::cmp::Reverse(*c));
    counts
        .into_iter()
        .map(|(brand, count)| BrandShare {
            brand: brand.to_string(),
            count,
            percent: count as f64 / total as f64 * 100.0,
        })
        .collect()
}

/// View 5. Distinct (competitor, sales, share) triples grouped per
/// competitor with max(sales) and mean(share); top 10 by sales.
pub fn top_competitor_table(slice: &[&MarketRow]) -> Vec<TopCompetitorRow> {
    #[derive(Default)]
    struct Acc {
        max_sales: f64,
        share_sum: f64,
        n: usize,
    }

    let triples = distinct_by(
        slice.iter().map(|r| {
            (
                r.competitor_brand.as_str(),
                r.competitor_brand_sales,
                r.competitor_som,
            )
        }),
        |(c, s, m)| (*c, float_key(*s), float_key(*m)),
    );

    let mut groups: Vec<(&str, Acc)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (competitor, sales, share) in triples {
        let i = *index.entry(competitor).or_insert_with(|| {
            groups.push((
                competitor,
                Acc {
                    max_sales: f64::NEG_INFINITY,
                    ..Acc::default()
                },
            ));
            groups.len() - 1
        });
        let acc = &mut groups[i].1;
        acc.max_sales = acc.max_sales.max(sales);
        acc.share_sum += share;
        acc.n += 1;
    }

    let mut rows: Vec<(&str, f64, f64)> = groups
        .into_iter()
        .map(|(c, acc)| (c, acc.max_sales, acc.share_sum / acc.n as f64))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));
    rows.truncate(TOP_COMPETITORS);

    rows.into_iter()
        .enumerate()
        .map(|(i, (competitor, sales, share))| TopCompetitorRow {
            rank: i + 1,
            competitor: competitor.to_string(),
            sales,
            share,
            sales_display: format::thousands(sales, 2),
            share_display: format::fraction_as_percent(share),
        })
        .collect()
}

/// View 6. Distinct (pattern, pattern sales) pairs of one competitor.
pub fn pattern_breakdown(slice: &[&MarketRow], competitor: &str) -> PatternBreakdown {
    let pairs = distinct_by(
        slice
            .iter()
            .filter(|r| r.competitor_brand == competitor)
            .map(|r| (r.competitor_pattern.as_str(), r.competitor_pattern_sales)),
        |(p, s)| (*p, float_key(*s)),
    );
    let total: f64 = pairs.iter().map(|(_, s)| s).sum();

    let patterns = pairs
        .into_iter()
        .map(|(pattern, sales)| PatternSales {
            pattern: pattern.to_string(),
            sales,
            percent_of_total: if total > 0.0 { sales / total * 100.0 } else { 0.0 },
        })
        .collect();

    PatternBreakdown {
        competitor: Some(competitor.to_string()),
        patterns,
    }
}

/// View 7. Every row with both a price and a design name, in slice order.
pub fn price_by_design(slice: &[&MarketRow]) -> Vec<DesignPrice> {
    slice
        .iter()
        .filter_map(|r| {
            let price = r.sales_price_usd?;
            let design = r.design_name.as_ref()?;
            Some(DesignPrice {
                design: design.clone(),
                price_usd: price,
                price_display: format::usd(price),
                brand: r.brand_name.clone(),
                brand_type: r.brand_type.clone(),
            })
        })
        .collect()
}

/// View 8. First distinct (lux SUV parc, total parc, ratio) triple.
pub fn car_parc(slice: &[&MarketRow]) -> Option<CarParcSnapshot> {
    let triples = distinct_by(
        slice
            .iter()
            .map(|r| (r.lux_suv_carparc, r.total_carparc, r.lux_suv_ratio)),
        |(l, t, r)| (float_key(*l), float_key(*t), float_key(*r)),
    );
    let &(lux, total, ratio) = triples.first()?;
    if triples.len() > 1 {
        log::warn!(
            "{} distinct car parc snapshots in one selection, reporting the first",
            triples.len()
        );
    }
    Some(CarParcSnapshot {
        lux_suv_carparc: lux,
        total_carparc: total,
        lux_suv_ratio: ratio,
        lux_suv_carparc_display: format::thousands(lux, 2),
        total_carparc_display: format::thousands(total, 2),
        lux_suv_ratio_display: format::fraction_as_percent(ratio),
        distinct_snapshots: triples.len(),
    })
}

/// View 9. Up to five distinct non-null fitment values, in slice order.
pub fn top_fitments(slice: &[&MarketRow]) -> Vec<String> {
    let mut fitments = distinct_by(
        slice.iter().filter_map(|r| r.top_5_fitments.clone()),
        |f| f.clone(),
    );
    fitments.truncate(TOP_FITMENTS);
    fitments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::row;

    fn competitor(name: &str, sales: f64, pattern: &str, pattern_sales: f64) -> MarketRow {
        let mut r = row();
        r.competitor_brand = name.to_string();
        r.competitor_brand_sales = sales;
        r.competitor_pattern = pattern.to_string();
        r.competitor_pattern_sales = pattern_sales;
        r
    }

    fn usa() -> FilterSelection {
        FilterSelection::new(2024, "USA", "225/65R17")
    }

    #[test]
    fn test_sales_comparison_dedups_pairs() {
        let rows = [row(), row()];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let view = sales_comparison(&slice).unwrap();
        assert_eq!(
            view.labeled(),
            [
                ("Total Industry Sales", 2_000_000.0),
                ("Goodyear Sales", 500_000.0)
            ]
        );
        assert_eq!(view.distinct_pairs, 1);
    }

    #[test]
    fn test_sales_comparison_takes_first_pair_on_anomaly() {
        let mut second = row();
        second.goodyear_sales = 1.0;
        let rows = [row(), second];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let view = sales_comparison(&slice).unwrap();
        assert_eq!(view.goodyear_sales, 500_000.0);
        assert_eq!(view.distinct_pairs, 2);
    }

    #[test]
    fn test_market_share_formats_two_decimals() {
        let rows = [row(), row()];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let share = market_share(&slice).unwrap();
        assert_eq!(share.display, "25.00%");
        assert!((share.percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_market_share_is_mean_of_distinct_values() {
        let mut a = row();
        a.som_of_brand = 0.2;
        let mut b = row();
        b.som_of_brand = 0.4;
        let rows = [a.clone(), a, b];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let share = market_share(&slice).unwrap();
        assert_eq!(share.display, "30.00%");
    }

    #[test]
    fn test_competitor_ranking_example() {
        let rows = [
            competitor("A", 100.0, "P1", 60.0),
            competitor("A", 100.0, "P2", 40.0),
            competitor("B", 80.0, "Q1", 80.0),
        ];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let ranking = competitor_ranking(&slice);
        assert_eq!(
            ranking,
            vec![
                CompetitorSales {
                    competitor: "A".to_string(),
                    sales: 100.0
                },
                CompetitorSales {
                    competitor: "B".to_string(),
                    sales: 80.0
                },
            ]
        );
    }

    #[test]
    fn test_competitor_ranking_sums_distinct_sales() {
        let rows = [
            competitor("A", 100.0, "P1", 1.0),
            competitor("A", 50.0, "P1", 1.0),
            competitor("B", 120.0, "Q1", 1.0),
        ];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let ranking = competitor_ranking(&slice);
        assert_eq!(ranking[0].competitor, "A");
        assert_eq!(ranking[0].sales, 150.0);
        assert_eq!(ranking[1].competitor, "B");
    }

    #[test]
    fn test_ranking_and_table_keep_ten() {
        let rows: Vec<MarketRow> = (0..15)
            .map(|i| competitor(&format!("C{i}"), f64::from(i) * 10.0, "P", 1.0))
            .collect();
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let ranking = competitor_ranking(&slice);
        let table = top_competitor_table(&slice);
        assert_eq!(ranking.len(), 10);
        assert_eq!(table.len(), 10);
        assert_eq!(ranking[0].competitor, "C14");
        assert_eq!(table[0].competitor, "C14");
        assert_eq!(table[9].rank, 10);
    }

    #[test]
    fn test_ranking_ties_keep_source_order() {
        let rows = [
            competitor("Zeta", 10.0, "P", 1.0),
            competitor("Alpha", 10.0, "P", 1.0),
        ];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let ranking = competitor_ranking(&slice);
        assert_eq!(ranking[0].competitor, "Zeta");
        assert_eq!(ranking[1].competitor, "Alpha");
    }

    #[test]
    fn test_brand_distribution_counts_rows() {
        let mut none = row();
        none.brand_name = None;
        let mut other = row();
        other.brand_name = Some("Kelly".to_string());
        let rows = [row(), row(), row(), other, none];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let dist = brand_distribution(&slice);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].brand, "Goodyear");
        assert_eq!(dist[0].count, 3);
        assert!((dist[0].percent - 75.0).abs() < 1e-9);
        assert!((dist[1].percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_competitor_table_max_sales_mean_share() {
        let mut a1 = competitor("A", 100.0, "P1", 1.0);
        a1.competitor_som = 0.1;
        let mut a2 = competitor("A", 90.0, "P1", 1.0);
        a2.competitor_som = 0.3;
        let mut b = competitor("B", 1_234_567.0, "Q", 1.0);
        b.competitor_som = 0.5;
        let rows = [a1, a2, b];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let table = top_competitor_table(&slice);

        assert_eq!(table[0].competitor, "B");
        assert_eq!(table[0].sales_display, "1,234,567.00");
        assert_eq!(table[0].share_display, "50.00%");
        assert_eq!(table[1].competitor, "A");
        assert_eq!(table[1].sales, 100.0);
        assert_eq!(table[1].share_display, "20.00%");
    }

    #[test]
    fn test_pattern_breakdown_example() {
        let rows = [
            competitor("A", 100.0, "P1", 60.0),
            competitor("A", 100.0, "P2", 40.0),
            competitor("A", 100.0, "P2", 40.0),
            competitor("B", 80.0, "Q1", 80.0),
        ];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let breakdown = pattern_breakdown(&slice, "A");
        let pairs: Vec<(&str, f64)> = breakdown
            .patterns
            .iter()
            .map(|p| (p.pattern.as_str(), p.sales))
            .collect();
        assert_eq!(pairs, vec![("P1", 60.0), ("P2", 40.0)]);
        assert!((breakdown.patterns[0].percent_of_total - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_pattern_breakdown_unknown_competitor_is_empty() {
        let rows = [competitor("A", 100.0, "P1", 60.0)];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let breakdown = pattern_breakdown(&slice, "Nobody");
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.competitor.as_deref(), Some("Nobody"));
    }

    #[test]
    fn test_price_by_design_drops_missing() {
        let mut no_price = row();
        no_price.sales_price_usd = None;
        let mut no_design = row();
        no_design.design_name = None;
        let mut other = row();
        other.design_name = Some("Eagle".to_string());
        other.sales_price_usd = Some(1299.5);
        let rows = [row(), no_price, no_design, other];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let prices = price_by_design(&slice);
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].design, "Assurance");
        assert_eq!(prices[0].price_display, "$189.99");
        assert_eq!(prices[1].price_display, "$1,299.50");
        assert_eq!(prices[1].brand.as_deref(), Some("Goodyear"));
        assert_eq!(prices[1].brand_type, "Tier 1");
    }

    #[test]
    fn test_car_parc_snapshot() {
        let rows = [row(), row()];
        let slice: Vec<&MarketRow> = rows.iter().collect();
        let parc = car_parc(&slice).unwrap();
        assert_eq!(parc.lux_suv_carparc_display, "1,250,000.00");
        assert_eq!(parc.total_carparc_display, "10,000,000.00");
        assert_eq!(parc.lux_suv_ratio_display, "12.50%");
        assert_eq!(parc.distinct_snapshots, 1);
        assert_eq!(car_parc(&[]), None);
    }

    #[test]
    fn test_top_fitments_distinct_first_five() {
        let rows: Vec<MarketRow> = ["F1", "F2", "F1", "F3", "F4", "F5", "F6"]
            .iter()
            .map(|f| {
                let mut r = row();
                r.top_5_fitments = Some(f.to_string());
                r
            })
            .chain(std::iter::once({
                let mut r = row();
                r.top_5_fitments = None;
                r
            }))
            .collect();
        let slice: Vec<&MarketRow> = rows.iter().collect();
        assert_eq!(top_fitments(&slice), vec!["F1", "F2", "F3", "F4", "F5"]);
    }

    #[test]
    fn test_compute_views_defaults_pattern_competitor_to_top_row() {
        let ds = MarketDataset::from_rows(vec![
            competitor("A", 100.0, "P1", 60.0),
            competitor("A", 100.0, "P2", 40.0),
            competitor("B", 80.0, "Q1", 80.0),
        ]);
        let implicit = compute_views(&ds, &usa(), None);
        let explicit = compute_views(&ds, &usa(), Some("A"));
        assert_eq!(implicit.pattern_breakdown.competitor.as_deref(), Some("A"));
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.top_competitor().map(|r| r.share_display.as_str()), Some("10.00%"));

        let b = compute_views(&ds, &usa(), Some("B"));
        assert_eq!(b.pattern_breakdown.patterns.len(), 1);
        assert_eq!(b.pattern_breakdown.patterns[0].pattern, "Q1");
    }

    #[test]
    fn test_compute_views_empty_slice() {
        let ds = MarketDataset::from_rows(vec![row()]);
        let views = compute_views(&ds, &FilterSelection::new(1999, "USA", "225/65R17"), None);
        assert_eq!(views.row_count, 0);
        assert!(views.sales_comparison.is_none());
        assert!(views.market_share.is_none());
        assert!(views.competitor_ranking.is_empty());
        assert!(views.brand_distribution.is_empty());
        assert!(views.top_competitors.is_empty());
        assert!(views.top_competitor().is_none());
        assert_eq!(views.pattern_breakdown, PatternBreakdown::default());
        assert!(views.price_by_design.is_empty());
        assert!(views.car_parc.is_none());
        assert!(views.top_fitments.is_empty());
    }
}
