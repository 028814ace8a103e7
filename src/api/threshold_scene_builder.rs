use crate::render::{ChartLayer, LayerPrimitives, LinePrimitive};

use super::SceneContext;

/// One horizontal line per defined threshold.
///
/// Colored thresholds reuse the palette entry that bars above (or below) the
/// threshold are painted with.
#[must_use]
pub fn build_thresholds(ctx: &SceneContext<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::Thresholds);
    let Some(thresholds) = ctx.config.thresholds.as_ref() else {
        return layer;
    };
    let geometry = ctx.geometry;
    for (kind, value) in thresholds.defined() {
        let color = if ctx.config.show_colored_thresholds {
            ctx.style.palette.for_kind(kind)
        } else {
            ctx.style.neutral_threshold_color
        };
        layer.lines.push(LinePrimitive::horizontal(
            geometry.value_row(value),
            geometry.plot_left(),
            geometry.plot_right(),
            ctx.style.threshold_stroke_width,
            color,
        ));
    }
    layer
}
