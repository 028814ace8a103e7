mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod svg_renderer;

pub use frame::RenderFrame;
pub use layer_stack::ChartLayer;
pub use layered_frame::{LayerPrimitives, LayeredRenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};
pub(crate) use primitives::lerp;
pub use svg_renderer::SvgRenderer;

use crate::error::ChartResult;
use crate::interaction::TooltipState;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Shows, moves or hides the floating tooltip.
    ///
    /// Backends without an overlay surface can ignore it.
    fn render_tooltip(&mut self, _tooltip: &TooltipState) -> ChartResult<()> {
        Ok(())
    }

    /// Drops everything drawn so far; called when the chart is disposed.
    fn clear(&mut self) -> ChartResult<()> {
        Ok(())
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
