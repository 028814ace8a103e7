use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{DataPoint, ThresholdKind, Thresholds};
use crate::render::Color;

/// Column colors used by the threshold resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdPalette {
    pub default: Color,
    pub very_low: Color,
    pub low: Color,
    pub high: Color,
    pub very_high: Color,
}

impl Default for ThresholdPalette {
    fn default() -> Self {
        Self {
            default: Color::from_rgb8(70, 130, 180),
            very_low: Color::from_rgb8(178, 24, 43),
            low: Color::from_rgb8(239, 138, 98),
            high: Color::from_rgb8(253, 174, 97),
            very_high: Color::from_rgb8(215, 48, 39),
        }
    }
}

impl ThresholdPalette {
    #[must_use]
    pub fn for_kind(&self, kind: ThresholdKind) -> Color {
        match kind {
            ThresholdKind::VeryLow => self.very_low,
            ThresholdKind::Low => self.low,
            ThresholdKind::High => self.high,
            ThresholdKind::VeryHigh => self.very_high,
        }
    }
}

/// Maps a value to its display color.
///
/// The low side is evaluated first, then the high side; with overlapping
/// thresholds the high side wins.
#[must_use]
pub fn resolve_color(value: f64, thresholds: Option<&Thresholds>, palette: &ThresholdPalette) -> Color {
    let Some(thresholds) = thresholds else {
        return palette.default;
    };

    let mut color = palette.default;
    if thresholds.low.is_some_and(|low| value <= low) {
        color = palette.low;
    }
    if thresholds.very_low.is_some_and(|very_low| value <= very_low) {
        color = palette.very_low;
    }
    if thresholds.high.is_some_and(|high| value >= high) {
        color = palette.high;
    }
    if thresholds.very_high.is_some_and(|very_high| value >= very_high) {
        color = palette.very_high;
    }
    color
}

/// Color of one column: explicit point color, else threshold color, else default.
#[must_use]
pub fn point_color(point: &DataPoint, thresholds: Option<&Thresholds>, palette: &ThresholdPalette) -> Color {
    if let Some(raw) = point.color.as_deref() {
        match Color::parse(raw) {
            Ok(color) => return color,
            Err(err) => warn!(
                name = %point.name,
                error = %err,
                "ignoring unparseable column color override"
            ),
        }
    }
    resolve_color(point.value, thresholds, palette)
}
