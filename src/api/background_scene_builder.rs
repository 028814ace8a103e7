use crate::render::{ChartLayer, LayerPrimitives, RectPrimitive};

use super::SceneContext;

/// Full-height backdrop behind every column. These rects double as the
/// tooltip hit areas.
#[must_use]
pub fn build_column_backgrounds(ctx: &SceneContext<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::Background);
    let geometry = ctx.geometry;
    let height = (geometry.plot_bottom() - geometry.plot_top()).max(0.0);
    for index in 0..ctx.config.data.len() {
        layer.rects.push(RectPrimitive::new(
            geometry.column_left(index),
            geometry.plot_top(),
            geometry.column_width,
            height,
            ctx.style.column_background_color,
        ));
    }
    layer
}
