use crate::core::Viewport;

use super::{ChartLayer, LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive};

/// Primitives owned by one scene layer.
///
/// Element order inside a layer is positional: element `i` of a data-driven
/// layer belongs to data point `i` (or to a fixed slot derived from it).
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayer,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: ChartLayer) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Chart scene split into paint-ordered layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl LayeredRenderFrame {
    #[must_use]
    pub fn canonical(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: ChartLayer::PAINT_ORDER
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayer) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: ChartLayer) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    /// Replaces the layer of the same kind, keeping paint order.
    pub fn replace_layer(&mut self, primitives: LayerPrimitives) {
        if let Some(layer) = self.layer_mut(primitives.kind) {
            *layer = primitives;
        }
    }

    #[must_use]
    pub fn flatten(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in &self.layers {
            frame.push_layer(layer);
        }
        frame
    }

    #[must_use]
    pub fn flatten_layers(&self, include_layers: &[ChartLayer]) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport);
        for layer in self.layers.iter().filter(|layer| include_layers.contains(&layer.kind)) {
            frame.push_layer(layer);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerPrimitives, LayeredRenderFrame};
    use crate::core::Viewport;
    use crate::render::{ChartLayer, Color, LinePrimitive, RectPrimitive};

    #[test]
    fn replace_layer_keeps_paint_order() {
        let mut frame = LayeredRenderFrame::canonical(Viewport::new(100, 50));
        let mut bars = LayerPrimitives::empty(ChartLayer::Bars);
        bars.rects
            .push(RectPrimitive::new(0.0, 10.0, 5.0, 40.0, Color::rgb(0.0, 0.0, 1.0)));
        frame.replace_layer(bars);

        let mut borders = LayerPrimitives::empty(ChartLayer::Borders);
        borders.lines.push(LinePrimitive::horizontal(
            0.0,
            0.0,
            100.0,
            1.0,
            Color::rgb(0.0, 0.0, 0.0),
        ));
        frame.replace_layer(borders);

        let kinds: Vec<_> = frame.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(kinds, ChartLayer::PAINT_ORDER.to_vec());

        let flat = frame.flatten();
        assert_eq!(flat.rects.len(), 1);
        assert_eq!(flat.lines.len(), 1);

        let bars_only = frame.flatten_layers(&[ChartLayer::Bars]);
        assert_eq!(bars_only.rects.len(), 1);
        assert!(bars_only.lines.is_empty());
        assert!(frame.layer(ChartLayer::Thresholds).is_some_and(LayerPrimitives::is_empty));
    }
}
