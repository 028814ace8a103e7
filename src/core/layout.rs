use serde::{Deserialize, Serialize};

use crate::core::ticks::format_number;
use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

pub const MIN_FONT_SIZE_PX: f64 = 9.0;
pub const FONT_SIZE_RATIO: f64 = 0.6;
pub const MAX_COLUMN_WIDTH_PX: f64 = 20.0;
pub const Y_LABEL_CHAR_WIDTH_PX: f64 = 10.0;
pub const TICK_SPACING_PX: f64 = 20.0;
pub const RIGHT_MARGIN_PX: f64 = 5.0;
pub const BOTTOM_MARGIN_NO_AXIS_PX: f64 = 1.0;
pub const BOTTOM_MARGIN_FONT_RATIO: f64 = 1.3;
pub const TOP_MARGIN_FONT_RATIO: f64 = 0.5;

/// Everything the layout engine reads from a chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub viewport: Viewport,
    pub min: f64,
    pub max: f64,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[must_use]
pub fn font_size(column_width: f64) -> f64 {
    (column_width * FONT_SIZE_RATIO).max(MIN_FONT_SIZE_PX)
}

/// Fractional tick-count hint for an axis of the given height.
#[must_use]
pub fn tick_count(height: u32) -> f64 {
    f64::from(height) / TICK_SPACING_PX
}

/// Widest y-axis label, in characters, among the domain bounds.
#[must_use]
pub fn label_char_count(max: f64, min: f64) -> usize {
    format_number(max)
        .chars()
        .count()
        .max(format_number(min).chars().count())
}

/// Width of one column in pixels.
///
/// Columns and gaps share the available width equally (`2n - 1` slots), the
/// y-axis label estimate is removed first, and the result is capped.
#[must_use]
pub fn column_width(width: u32, num_cols: usize, max: f64, min: f64, show_y_axis: bool) -> f64 {
    if num_cols == 0 {
        return 0.0;
    }
    let label_width = if show_y_axis {
        Y_LABEL_CHAR_WIDTH_PX * label_char_count(max, min) as f64
    } else {
        0.0
    };
    let available = (f64::from(width) - label_width).max(0.0);
    let slots = (2 * num_cols - 1) as f64;
    (available / slots).min(MAX_COLUMN_WIDTH_PX)
}

#[must_use]
pub fn margins(column_width: f64, max: f64, min: f64, show_x_axis: bool, show_y_axis: bool) -> Margins {
    let font = font_size(column_width);
    Margins {
        top: TOP_MARGIN_FONT_RATIO * font,
        right: RIGHT_MARGIN_PX,
        bottom: if show_x_axis {
            BOTTOM_MARGIN_FONT_RATIO * font
        } else {
            BOTTOM_MARGIN_NO_AXIS_PX
        },
        left: if show_y_axis {
            font * label_char_count(max, min) as f64
        } else {
            0.0
        },
    }
}

/// Pixel geometry for one chart layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub num_cols: usize,
    pub column_width: f64,
    pub font_size: f64,
    pub tick_count: f64,
    pub margins: Margins,
    /// `[min, max]` to pixel extent `[margin_top, height - margin_bottom]`.
    pub y_scale: LinearScale,
    /// Column index to the column's left edge.
    pub x_scale: LinearScale,
    /// `[min, max]` to pixel row, inverted so larger values sit higher.
    pub y_axis_label_scale: LinearScale,
}

impl ChartGeometry {
    pub fn compute(input: LayoutInput, num_cols: usize) -> ChartResult<Self> {
        if !input.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: input.viewport.width,
                height: input.viewport.height,
            });
        }

        let width = f64::from(input.viewport.width);
        let height = f64::from(input.viewport.height);
        let column_width = column_width(
            input.viewport.width,
            num_cols,
            input.max,
            input.min,
            input.show_y_axis,
        );
        let margins = margins(
            column_width,
            input.max,
            input.min,
            input.show_x_axis,
            input.show_y_axis,
        );

        let last_index = num_cols.saturating_sub(1) as f64;
        let x_scale = LinearScale::new(
            (0.0, last_index),
            (margins.left, width - column_width - margins.right),
        )?;
        let y_scale = LinearScale::new(
            (input.min, input.max),
            (margins.top, height - margins.bottom),
        )?;
        let y_axis_label_scale = LinearScale::new(
            (input.min, input.max),
            (height - margins.bottom, margins.top),
        )?;

        Ok(Self {
            viewport: input.viewport,
            num_cols,
            column_width,
            font_size: font_size(column_width),
            tick_count: tick_count(input.viewport.height),
            margins,
            y_scale,
            x_scale,
            y_axis_label_scale,
        })
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        f64::from(self.viewport.height) - self.margins.bottom
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        f64::from(self.viewport.width) - self.margins.right
    }

    /// Distance in pixels between the plot bottom and `value`.
    #[must_use]
    pub fn value_extent(&self, value: f64) -> f64 {
        self.y_scale.map(value) - self.margins.top
    }

    /// Pixel row of `value`; rows grow downward while values grow upward.
    #[must_use]
    pub fn value_row(&self, value: f64) -> f64 {
        self.plot_bottom() - self.value_extent(value)
    }

    #[must_use]
    pub fn column_left(&self, index: usize) -> f64 {
        self.x_scale.map(index as f64)
    }

    #[must_use]
    pub fn column_center(&self, index: usize) -> f64 {
        self.column_left(index) + self.column_width * 0.5
    }
}
