use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipState;
use crate::render::{Color, RectPrimitive, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
///
/// The tooltip is painted over the last frame; changing it repaints that frame.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    tooltip_background: Color,
    tooltip_text: Color,
    last_frame: Option<RenderFrame>,
    tooltip: TooltipState,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            tooltip_background: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text: Color::rgb(1.0, 1.0, 1.0),
            last_frame: None,
            tooltip: TooltipState::hidden(),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn set_tooltip_colors(&mut self, background: Color, text: Color) -> ChartResult<()> {
        background.validate()?;
        text.validate()?;
        self.tooltip_background = background;
        self.tooltip_text = text;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            append_rect_path(context, *rect);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for line in frame.visible_lines() {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, &text.text, text.x, text.y, text.font_size_px, text.color, text.h_align);
            stats.texts_drawn += 1;
        }

        if self.tooltip.visible {
            self.draw_tooltip(context)?;
            stats.tooltip_drawn = true;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn draw_tooltip(&self, context: &Context) -> ChartResult<()> {
        let tooltip = &self.tooltip;
        let panel = RectPrimitive::new(
            tooltip.left,
            tooltip.top,
            tooltip.width,
            tooltip.height,
            self.tooltip_background,
        )
        .with_corner_radius(3.0);
        append_rect_path(context, panel);
        apply_color(context, panel.fill_color);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill tooltip", err))?;

        let x = tooltip.left + tooltip.padding_px;
        let mut baseline = tooltip.top + tooltip.padding_px + tooltip.font_size_px;
        draw_text(
            context,
            &tooltip.title,
            x,
            baseline,
            tooltip.font_size_px,
            self.tooltip_text,
            TextHAlign::Left,
        );
        for row in &tooltip.rows {
            baseline += tooltip.line_height_px;
            draw_text(
                context,
                &format!("{}: {}", row.key, row.value),
                x,
                baseline,
                tooltip.font_size_px,
                self.tooltip_text,
                TextHAlign::Left,
            );
        }
        Ok(())
    }
}

fn draw_text(
    context: &Context,
    text: &str,
    x: f64,
    baseline: f64,
    font_size_px: f64,
    color: Color,
    h_align: TextHAlign,
) {
    let layout = pangocairo::functions::create_layout(context);
    let font_description = FontDescription::from_string(&format!("Sans {font_size_px}"));
    layout.set_font_description(Some(&font_description));
    layout.set_text(text);

    let (text_width, _text_height) = layout.pixel_size();
    let x = match h_align {
        TextHAlign::Left => x,
        TextHAlign::Center => x - f64::from(text_width) / 2.0,
        TextHAlign::Right => x - f64::from(text_width),
    };
    let top = baseline - f64::from(layout.baseline()) / f64::from(pango::SCALE);

    apply_color(context, color);
    context.move_to(x, top);
    pangocairo::functions::show_layout(context, &layout);
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)?;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn render_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()> {
        self.tooltip = tooltip.clone();
        match self.last_frame.take() {
            Some(frame) => {
                let result = self.render(&frame);
                if result.is_err() {
                    self.last_frame = Some(frame);
                }
                result
            }
            None => Ok(()),
        }
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.last_frame = None;
        self.tooltip = TooltipState::hidden();
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
