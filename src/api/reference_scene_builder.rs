use crate::render::{ChartLayer, LayerPrimitives, LinePrimitive};

use super::{BarMode, SceneContext};

/// Horizontal overhang of a reference marker on each side of its column.
pub const REFERENCE_OVERHANG_PX: f64 = 1.0;

/// One reference marker per point; points without a reference get an
/// invisible (zero stroke) marker on the origin row.
#[must_use]
pub fn build_references(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::References);
    let geometry = ctx.geometry;
    for (index, point) in ctx.config.data.iter().enumerate() {
        let left = geometry.column_left(index) - REFERENCE_OVERHANG_PX;
        let right = geometry.column_left(index) + geometry.column_width + REFERENCE_OVERHANG_PX;
        let (row, stroke) = match point.reference {
            Some(reference) => (geometry.value_row(reference), ctx.style.reference_stroke_width),
            None => (mode.origin_row(geometry), 0.0),
        };
        layer.lines.push(LinePrimitive::horizontal(
            row,
            left,
            right,
            stroke,
            ctx.style.reference_color,
        ));
    }
    layer
}

/// Invisible markers on the origin row, where new markers grow from.
#[must_use]
pub fn build_reference_enter(ctx: &SceneContext<'_>, mode: BarMode) -> LayerPrimitives {
    let origin = mode.origin_row(ctx.geometry);
    let mut layer = build_references(ctx, mode);
    for line in &mut layer.lines {
        line.y1 = origin;
        line.y2 = origin;
        line.stroke_width = 0.0;
    }
    layer
}
