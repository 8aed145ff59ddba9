//! Runtime configuration: command-line flags and the layout policy.
//!
//! Layout is explicit configuration handed to the renderer; the pipeline
//! never sees it.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Viewport width (logical pixels) below which `Auto` switches to the
/// stacked mobile layout.
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;

/// How the dashboard arranges its sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LayoutMode {
    /// Pick by viewport width.
    #[default]
    Auto,
    /// Side-by-side columns.
    Desktop,
    /// Single stacked column.
    Mobile,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Auto, LayoutMode::Desktop, LayoutMode::Mobile];

    /// Whether sections should be stacked for a viewport of `width` pixels.
    pub fn is_mobile(self, width: f32, breakpoint: f32) -> bool {
        match self {
            LayoutMode::Auto => width < breakpoint,
            LayoutMode::Desktop => false,
            LayoutMode::Mobile => true,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutMode::Auto => write!(f, "Auto-detect"),
            LayoutMode::Desktop => write!(f, "Desktop View"),
            LayoutMode::Mobile => write!(f, "Mobile View"),
        }
    }
}

/// Tire Market Dashboard - market insights and competitor analysis
///
/// Examples:
///   tire-dashboard --data market.csv
///   tire-dashboard --data market.parquet --layout mobile
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct DashboardConfig {
    /// Dataset to open at startup (.csv, .json or .parquet)
    #[arg(short, long, value_name = "FILE", env = "TIRE_DASHBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Section layout
    #[arg(short, long, value_enum, default_value_t = LayoutMode::Auto)]
    pub layout: LayoutMode,

    /// Width in pixels below which auto layout stacks sections
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_MOBILE_BREAKPOINT)]
    pub mobile_breakpoint: f32,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: None,
            layout: LayoutMode::Auto,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            width: 1280.0,
            height: 900.0,
        }
    }
}
