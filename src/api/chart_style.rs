use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_TRANSITION_MS, Easing};
use crate::core::ThresholdPalette;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual constants of one chart instance.
///
/// Injected at construction and never mutated afterwards, so two charts never
/// share mutable styling state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub palette: ThresholdPalette,
    pub neutral_threshold_color: Color,
    pub column_background_color: Color,
    pub baseline_color: Color,
    pub border_color: Color,
    pub axis_color: Color,
    pub label_color: Color,
    pub reference_color: Color,
    pub error_bar_color: Color,
    pub threshold_stroke_width: f64,
    pub baseline_stroke_width: f64,
    pub border_stroke_width: f64,
    pub axis_stroke_width: f64,
    pub reference_stroke_width: f64,
    pub error_bar_stroke_width: f64,
    pub y_axis_tick_size_px: f64,
    pub transition_duration_ms: f64,
    pub easing: Easing,
    pub tooltip_font_size_px: f64,
    pub tooltip_line_height_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_char_width_px: f64,
    pub tooltip_offset_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            palette: ThresholdPalette::default(),
            neutral_threshold_color: Color::from_rgb8(153, 153, 153),
            column_background_color: Color::from_rgb8(238, 238, 238).with_alpha(0.5),
            baseline_color: Color::from_rgb8(51, 51, 51),
            border_color: Color::from_rgb8(204, 204, 204),
            axis_color: Color::from_rgb8(102, 102, 102),
            label_color: Color::from_rgb8(68, 68, 68),
            reference_color: Color::rgb(0.0, 0.0, 0.0),
            error_bar_color: Color::from_rgb8(51, 51, 51),
            threshold_stroke_width: 1.0,
            baseline_stroke_width: 1.0,
            border_stroke_width: 1.0,
            axis_stroke_width: 1.0,
            reference_stroke_width: 2.0,
            error_bar_stroke_width: 1.0,
            y_axis_tick_size_px: 3.0,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::CubicInOut,
            tooltip_font_size_px: 11.0,
            tooltip_line_height_px: 14.0,
            tooltip_padding_px: 6.0,
            tooltip_char_width_px: 6.5,
            tooltip_offset_px: 10.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.palette.default,
            self.palette.very_low,
            self.palette.low,
            self.palette.high,
            self.palette.very_high,
            self.neutral_threshold_color,
            self.column_background_color,
            self.baseline_color,
            self.border_color,
            self.axis_color,
            self.label_color,
            self.reference_color,
            self.error_bar_color,
        ] {
            color.validate()?;
        }

        for (value, name) in [
            (self.threshold_stroke_width, "threshold_stroke_width"),
            (self.baseline_stroke_width, "baseline_stroke_width"),
            (self.border_stroke_width, "border_stroke_width"),
            (self.axis_stroke_width, "axis_stroke_width"),
            (self.reference_stroke_width, "reference_stroke_width"),
            (self.error_bar_stroke_width, "error_bar_stroke_width"),
            (self.y_axis_tick_size_px, "y_axis_tick_size_px"),
            (self.transition_duration_ms, "transition_duration_ms"),
            (self.tooltip_padding_px, "tooltip_padding_px"),
            (self.tooltip_offset_px, "tooltip_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and >= 0"
                )));
            }
        }

        for (value, name) in [
            (self.tooltip_font_size_px, "tooltip_font_size_px"),
            (self.tooltip_line_height_px, "tooltip_line_height_px"),
            (self.tooltip_char_width_px, "tooltip_char_width_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }

        Ok(())
    }
}
