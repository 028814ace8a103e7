use crate::core::{format_tick, nice_ticks, tick_step};
use crate::render::{ChartLayer, LayerPrimitives, LinePrimitive, TextHAlign, TextPrimitive};

use super::SceneContext;

/// Gap between a y tick and its label.
const Y_LABEL_GAP_PX: f64 = 2.0;

/// Column names centered under each column, one font size below the plot.
///
/// A point with an empty name gets no label, so the label count can be lower
/// than the number of points. Labels are not animated and carry no positional
/// identity.
#[must_use]
pub fn build_x_axis(ctx: &SceneContext<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::XAxis);
    if !ctx.config.show_x_axis {
        return layer;
    }
    let geometry = ctx.geometry;
    let y = geometry.plot_bottom() + geometry.font_size;
    for (index, point) in ctx.config.data.iter().enumerate() {
        if point.name.is_empty() {
            continue;
        }
        layer.texts.push(TextPrimitive::new(
            point.name.clone(),
            geometry.column_center(index),
            y,
            geometry.font_size,
            ctx.style.label_color,
            TextHAlign::Center,
        ));
    }
    layer
}

/// Upper bound on requested y ticks, whatever the chart height.
pub const MAX_Y_TICKS: f64 = 50.0;

/// Number of y ticks requested from the tick generator.
#[must_use]
pub fn y_tick_count(tick_count_hint: f64) -> f64 {
    tick_count_hint.round().clamp(1.0, MAX_Y_TICKS)
}

/// Vertical spine on the left plot edge with outward ticks and
/// right-aligned value labels.
#[must_use]
pub fn build_y_axis(ctx: &SceneContext<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::YAxis);
    if !ctx.config.show_y_axis {
        return layer;
    }
    let geometry = ctx.geometry;
    let style = ctx.style;
    let x = geometry.plot_left();
    layer.lines.push(LinePrimitive::vertical(
        x,
        geometry.plot_top(),
        geometry.plot_bottom(),
        style.axis_stroke_width,
        style.axis_color,
    ));

    let (min, max) = (ctx.config.min, ctx.config.max);
    let count = y_tick_count(geometry.tick_count);
    let step = tick_step(min, max, count);
    for tick in nice_ticks(min, max, count) {
        let row = geometry.y_axis_label_scale.map(tick);
        layer.lines.push(LinePrimitive::horizontal(
            row,
            x - style.y_axis_tick_size_px,
            x,
            style.axis_stroke_width,
            style.axis_color,
        ));
        layer.texts.push(TextPrimitive::new(
            format_tick(tick, step),
            x - style.y_axis_tick_size_px - Y_LABEL_GAP_PX,
            row + geometry.font_size / 3.0,
            geometry.font_size,
            style.label_color,
            TextHAlign::Right,
        ));
    }
    layer
}
