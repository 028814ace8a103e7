use crate::render::{ChartLayer, LayerPrimitives, LinePrimitive};

use super::{BarMode, SceneContext};

/// Column width at or below which caps span the whole column.
pub const NARROW_COLUMN_PX: f64 = 10.0;

/// Lines emitted per data point: spine, top cap, bottom cap.
pub const LINES_PER_ERROR_BAR: usize = 3;

#[must_use]
pub fn cap_width(column_width: f64) -> f64 {
    if column_width > NARROW_COLUMN_PX {
        column_width * 0.5
    } else {
        column_width
    }
}

/// Error bars for every point, three lines each.
///
/// Points without an error range keep zero-width lines at the origin row so
/// line `3 * i` always belongs to point `i`.
#[must_use]
pub fn build_error_bars(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::ErrorBars);
    let geometry = ctx.geometry;
    let half_cap = cap_width(geometry.column_width) * 0.5;
    let color = ctx.style.error_bar_color;

    for (index, point) in ctx.config.data.iter().enumerate() {
        let center = geometry.column_center(index);
        let (high_row, low_row, stroke) = match point.error {
            Some(error) => (
                mode.row(geometry, error.high),
                mode.row(geometry, error.low),
                ctx.style.error_bar_stroke_width,
            ),
            None => {
                let origin = mode.origin_row(geometry);
                (origin, origin, 0.0)
            }
        };
        layer
            .lines
            .push(LinePrimitive::vertical(center, high_row, low_row, stroke, color));
        layer.lines.push(LinePrimitive::horizontal(
            high_row,
            center - half_cap,
            center + half_cap,
            stroke,
            color,
        ));
        layer.lines.push(LinePrimitive::horizontal(
            low_row,
            center - half_cap,
            center + half_cap,
            stroke,
            color,
        ));
    }
    layer
}

/// Collapsed error bars on the origin row, used when new points appear.
#[must_use]
pub fn build_error_bar_enter(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let origin = mode.origin_row(ctx.geometry);
    let mut layer = build_error_bars(ctx, mode);
    for line in &mut layer.lines {
        line.y1 = origin;
        line.y2 = origin;
        line.stroke_width = 0.0;
    }
    layer
}
