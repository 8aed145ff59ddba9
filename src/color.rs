use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

/// Industry bar in the sales comparison.
pub const INDUSTRY_BLUE: Color32 = Color32::from_rgb(0x1f, 0x77, 0xb4);
/// Own-brand bar in the sales comparison.
pub const GOODYEAR_YELLOW: Color32 = Color32::from_rgb(0xff, 0xcc, 0x00);
/// Competitor ranking bars.
pub const COMPETITOR_GREEN: Color32 = Color32::from_rgb(0x00, 0xcc, 0x96);
/// Highlighted figures on cards.
pub const HIGHLIGHT_PURPLE: Color32 = Color32::from_rgb(0xa3, 0x70, 0xf0);

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.6);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: brand / pattern label → Color32
// ---------------------------------------------------------------------------

/// Maps chart labels to distinct colours that stay fixed across filter
/// changes.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from the full set of labels of a dataset.
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        let mut labels: Vec<&str> = labels.into_iter().collect();
        labels.sort_unstable();
        labels.dedup();
        let palette = generate_palette(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a label; unknown labels get a hue derived from
    /// their text so pattern slices still differ.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or_else(|| fallback_color(label))
    }
}

fn fallback_color(label: &str) -> Color32 {
    let hash = label
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    let hue = (hash % 360) as f32;
    let rgb: Srgb = Hsl::new(hue, 0.55, 0.65).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
