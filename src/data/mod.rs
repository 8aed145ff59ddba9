/// Data layer: core types, loading, filtering and the view pipeline.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → MarketDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ MarketDataset  │  Vec<MarketRow>, distinct filter values
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (year, country, tire size) → filtered slice
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  slice → ViewSet (nine independent views)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  ViewSet → JSON, rows → CSV / Parquet
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod format;
pub mod loader;
pub mod model;
pub mod views;
