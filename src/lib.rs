//! Tire-market analytics: typed dataset, loaders and the filter-and-aggregate
//! pipeline behind the dashboard. Nothing in here depends on the UI.

pub mod config;
pub mod data;
