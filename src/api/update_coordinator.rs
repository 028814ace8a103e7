use tracing::{debug, trace};

use crate::core::{ChartGeometry, DataPoint};
use crate::error::ChartResult;
use crate::render::{ChartLayer, LayerPrimitives, Renderer};

use super::ColumnChart;
use super::scene_coordinator::{build_data_layers, build_static_layer};

const ANIMATED_LAYERS: [ChartLayer; 3] = [ChartLayer::Bars, ChartLayer::ErrorBars, ChartLayer::References];

impl<R: Renderer> ColumnChart<R> {
    /// Replaces the data and animates bars, error bars and reference markers
    /// from what is currently displayed to the new values.
    ///
    /// The bar mode chosen at render time is kept. When the number of points
    /// changes, geometry is recomputed and the static layers are rebuilt in
    /// place before the animated layers retarget.
    pub fn update(&mut self, data: Vec<DataPoint>) -> ChartResult<()> {
        self.ensure_rendered()?;

        let displayed: Vec<LayerPrimitives> = ANIMATED_LAYERS
            .iter()
            .map(|kind| self.displayed_layer(*kind))
            .collect();

        let previous_len = self.config.data.len();
        self.config.data = data;
        let len = self.config.data.len();

        if len != previous_len {
            self.geometry = ChartGeometry::compute(self.config.layout_input(), len)?;
            let rebuilt: Vec<LayerPrimitives> = {
                let ctx = self.scene_context();
                ChartLayer::PAINT_ORDER
                    .into_iter()
                    .filter(|kind| !kind.is_data_driven())
                    .map(|kind| build_static_layer(&ctx, self.bar_mode, kind))
                    .collect()
            };
            for layer in rebuilt {
                self.scene.replace_layer(layer);
            }
            debug!(
                previous_len,
                len,
                column_width = self.geometry.column_width,
                "data length changed, geometry recomputed"
            );
        }

        let layers = build_data_layers(&self.scene_context(), self.bar_mode);
        for (from, layer) in displayed.iter().zip(layers) {
            self.scene.replace_layer(layer.settled.clone());
            self.transitions.start(from, layer.settled, &layer.enter);
        }
        trace!(
            points = len,
            clock_ms = self.transitions.clock_ms(),
            "retargeted data transitions"
        );

        self.submit()?;
        self.refresh_tooltip()
    }
}
