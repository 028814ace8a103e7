use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LayerPrimitives, LinePrimitive, RectPrimitive, TextPrimitive};

/// Flat draw list for one chart pass, produced from the layered scene.
///
/// Backends paint rects first, then lines, then texts. Lines with zero stroke
/// are positional placeholders and are skipped when drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Appends one scene layer after everything already in the frame.
    pub fn push_layer(&mut self, layer: &LayerPrimitives) {
        self.rects.extend_from_slice(&layer.rects);
        self.lines.extend_from_slice(&layer.lines);
        self.texts.extend(layer.texts.iter().cloned());
    }

    /// Lines a backend will actually stroke.
    pub fn visible_lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.lines.iter().filter(|line| line.is_visible())
    }

    /// Rejects an empty viewport and any primitive with non-finite geometry,
    /// negative sizes or out-of-range colors.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.rects.iter().try_for_each(|rect| rect.validate())?;
        self.lines.iter().try_for_each(|line| line.validate())?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}
