//! Renderer: consumes a `ViewSet` and draws it. No aggregation happens here.

pub mod cards;
pub mod dashboard;
pub mod panels;
pub mod plot;
