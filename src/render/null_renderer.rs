use crate::error::ChartResult;
use crate::interaction::TooltipState;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
    pub last_tooltip: Option<TooltipState>,
    pub cleared: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_line_count = frame.lines.len();
        self.last_rect_count = frame.rects.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn render_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()> {
        self.last_tooltip = Some(tooltip.clone());
        Ok(())
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.last_frame = None;
        self.last_tooltip = None;
        self.cleared = true;
        Ok(())
    }
}
