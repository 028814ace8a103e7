use serde::{Deserialize, Serialize};

use crate::core::{ChartGeometry, point_color};
use crate::render::{ChartLayer, LayerPrimitives, LinePrimitive, RectPrimitive};

use super::SceneContext;

/// Where columns grow from. Fixed when the chart is first rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BarMode {
    /// Columns start at the bottom of the plot (the domain minimum).
    ZeroOrigin,
    /// Columns grow up or down from this value.
    Baseline(f64),
}

impl BarMode {
    #[must_use]
    pub fn from_baseline(baseline: Option<f64>) -> Self {
        baseline.map_or(Self::ZeroOrigin, Self::Baseline)
    }

    /// Pixel row columns grow from.
    #[must_use]
    pub fn origin_row(self, geometry: &ChartGeometry) -> f64 {
        match self {
            Self::ZeroOrigin => geometry.plot_bottom(),
            Self::Baseline(baseline) => geometry.value_row(baseline),
        }
    }

    /// Pixel row of `value`, measured from the origin row: scaled extents are
    /// subtracted because rows grow downward.
    #[must_use]
    pub fn row(self, geometry: &ChartGeometry, value: f64) -> f64 {
        let origin_extent = match self {
            Self::ZeroOrigin => 0.0,
            Self::Baseline(baseline) => geometry.value_extent(baseline),
        };
        self.origin_row(geometry) - (geometry.value_extent(value) - origin_extent)
    }

    /// Top row and height of a span between the origin and `value`, clipped
    /// to the plot so out-of-domain values stop at its edge.
    #[must_use]
    pub fn span(self, geometry: &ChartGeometry, value: f64) -> (f64, f64) {
        let origin = clip_to_plot(geometry, self.origin_row(geometry));
        let row = clip_to_plot(geometry, self.row(geometry, value));
        (row.min(origin), (origin - row).abs())
    }
}

fn clip_to_plot(geometry: &ChartGeometry, row: f64) -> f64 {
    row.max(geometry.plot_top()).min(geometry.plot_bottom())
}

/// Settled column rectangles, one per data point.
#[must_use]
pub fn build_bars(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::Bars);
    let thresholds = ctx.config.thresholds.as_ref();
    for (index, point) in ctx.config.data.iter().enumerate() {
        let (top, height) = mode.span(ctx.geometry, point.value);
        layer.rects.push(RectPrimitive::new(
            ctx.geometry.column_left(index),
            top,
            ctx.geometry.column_width,
            height,
            point_color(point, thresholds, &ctx.style.palette),
        ));
    }
    layer
}

/// Zero-height columns sitting on the origin row; the start of enter animations.
#[must_use]
pub fn build_bar_enter(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let origin = clip_to_plot(ctx.geometry, mode.origin_row(ctx.geometry));
    let mut layer = build_bars(ctx, mode);
    for rect in &mut layer.rects {
        rect.y = origin;
        rect.height = 0.0;
    }
    layer
}

/// Horizontal reference line across the plot at the baseline value.
#[must_use]
pub fn build_baseline(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::Baseline);
    if let BarMode::Baseline(_) = mode {
        layer.lines.push(LinePrimitive::horizontal(
            mode.origin_row(ctx.geometry),
            ctx.geometry.plot_left(),
            ctx.geometry.plot_right(),
            ctx.style.baseline_stroke_width,
            ctx.style.baseline_color,
        ));
    }
    layer
}
