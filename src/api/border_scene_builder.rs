use crate::render::{ChartLayer, LayerPrimitives, LinePrimitive};

use super::SceneContext;

/// Top and bottom plot borders, spanning the plot width.
#[must_use]
pub fn build_borders(ctx: &SceneContext<'_>) -> LayerPrimitives {
    let mut layer = LayerPrimitives::empty(ChartLayer::Borders);
    let geometry = ctx.geometry;
    for row in [geometry.plot_top(), geometry.plot_bottom()] {
        layer.lines.push(LinePrimitive::horizontal(
            row,
            geometry.plot_left(),
            geometry.plot_right(),
            ctx.style.border_stroke_width,
            ctx.style.border_color,
        ));
    }
    layer
}
