use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::{PointerEvent, TooltipState};
use crate::render::{ChartLayer, Renderer};

use super::ColumnChart;
use super::tooltip_builder::build_tooltip;

impl<R: Renderer> ColumnChart<R> {
    pub fn pointer_enter(&mut self, event: PointerEvent) -> ChartResult<()> {
        self.pointer_move(event)
    }

    /// Shows or moves the tooltip of the column under the pointer.
    ///
    /// Ignored before the first render, when tooltips are disabled and for
    /// non-finite coordinates.
    pub fn pointer_move(&mut self, event: PointerEvent) -> ChartResult<()> {
        self.ensure_live()?;
        if self.ensure_rendered().is_err() || !self.config.show_tooltip || !event.is_finite() {
            return Ok(());
        }
        let tooltip = self.tooltip_at(event);
        let changed = tooltip != *self.interaction.tooltip();
        self.interaction.on_pointer_move(event, tooltip);
        if changed {
            trace!(
                x = event.x,
                y = event.y,
                column = ?self.interaction.hovered_column(),
                "tooltip changed"
            );
            self.renderer.render_tooltip(self.interaction.tooltip())?;
        }
        Ok(())
    }

    pub fn pointer_leave(&mut self, event: PointerEvent) -> ChartResult<()> {
        self.ensure_live()?;
        let was_visible = self.interaction.tooltip().visible;
        self.interaction.on_pointer_leave();
        if was_visible {
            trace!(x = event.x, y = event.y, "tooltip hidden");
            self.renderer.render_tooltip(self.interaction.tooltip())?;
        }
        Ok(())
    }

    /// Index of the column whose background contains the point.
    #[must_use]
    pub fn column_at(&self, x: f64, y: f64) -> Option<usize> {
        self.scene
            .layer(ChartLayer::Background)?
            .rects
            .iter()
            .position(|rect| rect.contains(x, y))
    }

    /// Re-evaluates the tooltip at the last pointer position after the data
    /// changed underneath it.
    pub(super) fn refresh_tooltip(&mut self) -> ChartResult<()> {
        match self.interaction.cursor() {
            Some(cursor) if self.config.show_tooltip => self.pointer_move(cursor),
            _ => Ok(()),
        }
    }

    fn tooltip_at(&self, event: PointerEvent) -> TooltipState {
        self.column_at(event.x, event.y)
            .and_then(|column| {
                self.config
                    .data
                    .get(column)
                    .map(|point| build_tooltip(point, column, event, &self.style))
            })
            .unwrap_or_default()
    }
}
