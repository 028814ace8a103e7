use tracing::debug;

use crate::animation::TransitionSet;
use crate::core::{ChartGeometry, DataPoint};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, TooltipState};
use crate::render::{ChartLayer, LayerPrimitives, LayeredRenderFrame, RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::scene_coordinator::{SceneContext, build_data_layers, build_full_scene};
use super::{BarMode, ChartConfig, ChartStyle, RawChartConfig};

/// Lifecycle of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    Uninitialized,
    Rendered,
    Disposed,
}

/// Column chart facade consumed by host applications.
///
/// Owns its config, geometry, scene and transitions; the host drives it with
/// `render`, `update`, `advance` and pointer events, and every resulting
/// frame is handed to the renderer.
pub struct ColumnChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) style: ChartStyle,
    pub(super) state: ChartState,
    pub(super) geometry: ChartGeometry,
    pub(super) bar_mode: BarMode,
    /// Settled layers; running transitions are sampled over them.
    pub(super) scene: LayeredRenderFrame,
    pub(super) transitions: TransitionSet,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ColumnChart<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::with_style(renderer, config, ChartStyle::default())
    }

    pub fn with_style(renderer: R, config: ChartConfig, style: ChartStyle) -> ChartResult<Self> {
        style.validate()?;
        let geometry = ChartGeometry::compute(config.layout_input(), config.data.len())?;
        let bar_mode = BarMode::from_baseline(config.baseline);
        Ok(Self {
            renderer,
            scene: LayeredRenderFrame::canonical(geometry.viewport),
            transitions: TransitionSet::new(style.transition_duration_ms, style.easing),
            config,
            style,
            state: ChartState::Uninitialized,
            geometry,
            bar_mode,
            interaction: InteractionState::default(),
        })
    }

    /// Builds a chart from untyped host attributes.
    pub fn from_raw(renderer: R, raw: &RawChartConfig) -> ChartResult<Self> {
        Self::new(renderer, ChartConfig::resolve(raw))
    }

    /// Full repaint: recomputes geometry, rebuilds every layer and grows the
    /// bars from their origin row.
    pub fn render(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        self.geometry = ChartGeometry::compute(self.config.layout_input(), self.config.data.len())?;
        self.bar_mode = BarMode::from_baseline(self.config.baseline);

        let (scene, [bars, _, _]) = {
            let ctx = self.scene_context();
            (
                build_full_scene(&ctx, self.bar_mode),
                build_data_layers(&ctx, self.bar_mode),
            )
        };
        self.scene = scene;
        self.transitions.clear();
        self.transitions.start(&bars.enter, bars.settled, &bars.enter);

        self.state = ChartState::Rendered;
        let had_tooltip = self.interaction.tooltip().visible;
        self.interaction.on_pointer_leave();
        debug!(
            points = self.config.data.len(),
            column_width = self.geometry.column_width,
            mode = ?self.bar_mode,
            "render column chart"
        );
        self.submit()?;
        if had_tooltip {
            self.renderer.render_tooltip(&TooltipState::hidden())?;
        }
        Ok(())
    }

    /// Steps the animation clock and resubmits the frame while anything moves.
    ///
    /// Returns whether transitions are still running.
    pub fn advance(&mut self, elapsed_ms: f64) -> ChartResult<bool> {
        self.ensure_live()?;
        if !self.transitions.is_animating() {
            return Ok(false);
        }
        let animating = self.transitions.advance(elapsed_ms);
        self.submit()?;
        Ok(animating)
    }

    /// Jumps every running transition to its end.
    pub fn settle(&mut self) -> ChartResult<()> {
        self.ensure_live()?;
        if !self.transitions.is_animating() {
            return Ok(());
        }
        self.transitions.clear();
        self.submit()
    }

    /// Drops transitions and tooltip and clears the renderer. Repeated calls
    /// are no-ops.
    pub fn dispose(&mut self) -> ChartResult<()> {
        if self.state == ChartState::Disposed {
            return Ok(());
        }
        self.transitions.clear();
        self.interaction.on_pointer_leave();
        self.state = ChartState::Disposed;
        debug!(points = self.config.data.len(), "dispose column chart");
        self.renderer.clear()
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transitions.is_animating()
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.config.data
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    #[must_use]
    pub fn bar_mode(&self) -> BarMode {
        self.bar_mode
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    /// Current scene with running transitions sampled in.
    #[must_use]
    pub fn layered_frame(&self) -> LayeredRenderFrame {
        let mut frame = self.scene.clone();
        self.transitions.sample_into(&mut frame);
        frame
    }

    #[must_use]
    pub fn frame(&self) -> RenderFrame {
        self.layered_frame().flatten()
    }

    /// Settled (end-of-transition) content of one layer.
    #[must_use]
    pub fn settled_layer(&self, kind: ChartLayer) -> Option<&LayerPrimitives> {
        self.scene.layer(kind)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Paints the current frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.ensure_live()?;
        let frame = self.frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    pub(super) fn scene_context(&self) -> SceneContext<'_> {
        SceneContext {
            config: &self.config,
            geometry: &self.geometry,
            style: &self.style,
        }
    }

    /// Displayed state of `kind`, mid-transition or settled.
    pub(super) fn displayed_layer(&self, kind: ChartLayer) -> LayerPrimitives {
        self.scene
            .layer(kind)
            .map_or_else(|| LayerPrimitives::empty(kind), |settled| self.transitions.displayed(settled))
    }

    pub(super) fn submit(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    pub(super) fn ensure_live(&self) -> ChartResult<()> {
        if self.state == ChartState::Disposed {
            return Err(ChartError::Disposed);
        }
        Ok(())
    }

    pub(super) fn ensure_rendered(&self) -> ChartResult<()> {
        match self.state {
            ChartState::Rendered => Ok(()),
            ChartState::Uninitialized => Err(ChartError::NotRendered),
            ChartState::Disposed => Err(ChartError::Disposed),
        }
    }
}
