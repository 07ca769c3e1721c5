use std::fmt;

/// Golden-angle step, keeps neighbouring series visually apart.
const HUE_STEP: f64 = 137.5;
const SATURATION: u8 = 70;
const LIGHTNESS: u8 = 60;

/// Line color of a chart series, derived only from the series' ordinal
/// position so re-renders of the same data keep the same colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColor {
    hue: f64,
}

impl SeriesColor {
    pub fn for_index(index: usize) -> Self {
        Self {
            hue: (index as f64 * HUE_STEP) % 360.0,
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

/// Renders as a CSS `hsl()` color.
impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, SATURATION, LIGHTNESS)
    }
}
