use std::fmt::Write;

use crate::core::format_number;
use crate::error::ChartResult;
use crate::interaction::TooltipState;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Serializes frames into standalone SVG documents.
///
/// The floating tooltip is kept apart from the frame and appended as the
/// last group of the document while it is visible.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    body: String,
    tooltip: String,
    viewport: Option<(u32, u32)>,
    tooltip_background: Color,
    tooltip_text: Color,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            body: String::new(),
            tooltip: String::new(),
            viewport: None,
            tooltip_background: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tooltip_colors(mut self, background: Color, text: Color) -> Self {
        self.tooltip_background = background;
        self.tooltip_text = text;
        self
    }

    /// Last rendered document, or `None` before the first frame.
    #[must_use]
    pub fn document(&self) -> Option<String> {
        let (width, height) = self.viewport?;
        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        output.push_str(&self.body);
        output.push_str(&self.tooltip);
        output.push_str("</svg>\n");
        Some(output)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut body = String::new();
        for rect in &frame.rects {
            let _ = write!(
                body,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                px(rect.x),
                px(rect.y),
                px(rect.width),
                px(rect.height),
                rect.fill_color.to_css()
            );
            if rect.border_width > 0.0 {
                let _ = write!(
                    body,
                    r#" stroke="{}" stroke-width="{}""#,
                    rect.border_color.to_css(),
                    px(rect.border_width)
                );
            }
            if rect.corner_radius > 0.0 {
                let _ = write!(body, r#" rx="{}""#, px(rect.corner_radius));
            }
            body.push_str("/>\n");
        }

        for line in frame.visible_lines() {
            let _ = writeln!(
                body,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                px(line.x1),
                px(line.y1),
                px(line.x2),
                px(line.y2),
                line.color.to_css(),
                px(line.stroke_width)
            );
        }

        for text in &frame.texts {
            let _ = writeln!(
                body,
                r#"  <text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
                px(text.x),
                px(text.y),
                text_anchor(text.h_align),
                text.color.to_css(),
                px(text.font_size_px),
                xml_escape(&text.text)
            );
        }

        self.body = body;
        self.viewport = Some((frame.viewport.width, frame.viewport.height));
        Ok(())
    }

    fn render_tooltip(&mut self, tooltip: &TooltipState) -> ChartResult<()> {
        self.tooltip.clear();
        if !tooltip.visible {
            return Ok(());
        }

        let output = &mut self.tooltip;
        let _ = writeln!(
            output,
            r#"  <g class="tooltip" transform="translate({},{})">"#,
            px(tooltip.left),
            px(tooltip.top)
        );
        let _ = writeln!(
            output,
            r#"    <rect width="{}" height="{}" rx="3" fill="{}"/>"#,
            px(tooltip.width),
            px(tooltip.height),
            self.tooltip_background.to_css()
        );
        let text_color = self.tooltip_text.to_css();
        let mut baseline = tooltip.padding_px + tooltip.font_size_px;
        let _ = writeln!(
            output,
            r#"    <text x="{}" y="{}" fill="{text_color}" font-size="{}" font-weight="bold">{}</text>"#,
            px(tooltip.padding_px),
            px(baseline),
            px(tooltip.font_size_px),
            xml_escape(&tooltip.title)
        );
        for row in &tooltip.rows {
            baseline += tooltip.line_height_px;
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" fill="{text_color}" font-size="{}">{}: {}</text>"#,
                px(tooltip.padding_px),
                px(baseline),
                px(tooltip.font_size_px),
                xml_escape(&row.key),
                xml_escape(&row.value)
            );
        }
        output.push_str("  </g>\n");
        Ok(())
    }

    fn clear(&mut self) -> ChartResult<()> {
        self.body.clear();
        self.tooltip.clear();
        self.viewport = None;
        Ok(())
    }
}

fn px(value: f64) -> String {
    format_number(value)
}

fn text_anchor(align: TextHAlign) -> &'static str {
    match align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::{SvgRenderer, xml_escape};
    use crate::core::Viewport;
    use crate::interaction::{TooltipRow, TooltipState};
    use crate::render::{
        Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    };

    #[test]
    fn escapes_markup_in_labels() {
        assert_eq!(xml_escape("<b>&'\""), "&lt;b&gt;&amp;&#39;&quot;");
    }

    #[test]
    fn document_contains_visible_primitives_only() {
        let mut renderer = SvgRenderer::new();
        assert!(renderer.document().is_none());

        let frame = RenderFrame::new(Viewport::new(150, 75))
            .with_rect(RectPrimitive::new(0.0, 26.4, 20.0, 47.6, Color::parse("#4682b4").expect("color")))
            .with_line(LinePrimitive::horizontal(6.0, 0.0, 145.0, 1.0, Color::rgb(0.0, 0.0, 0.0)))
            .with_line(LinePrimitive::horizontal(9.0, 0.0, 20.0, 0.0, Color::rgb(0.0, 0.0, 0.0)))
            .with_text(TextPrimitive::new(
                "Jan & Feb",
                10.0,
                70.0,
                12.0,
                Color::rgb(0.0, 0.0, 0.0),
                TextHAlign::Center,
            ));
        renderer.render(&frame).expect("render");

        let svg = renderer.document().expect("document");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"<rect x="0" y="26.4" width="20" height="47.6" fill="#4682b4"/>"##));
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("Jan &amp; Feb"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn tooltip_group_follows_visibility() {
        let mut renderer = SvgRenderer::new();
        renderer
            .render(&RenderFrame::new(Viewport::new(100, 50)))
            .expect("render");

        let mut tooltip = TooltipState {
            visible: true,
            column: Some(0),
            title: "Jan".to_owned(),
            left: 5.0,
            top: 2.0,
            width: 60.0,
            height: 30.0,
            font_size_px: 11.0,
            line_height_px: 14.0,
            padding_px: 4.0,
            ..TooltipState::default()
        };
        tooltip.rows.push(TooltipRow::new("value", "7"));
        renderer.render_tooltip(&tooltip).expect("tooltip");
        let svg = renderer.document().expect("document");
        assert!(svg.contains(r#"class="tooltip""#));
        assert!(svg.contains("value: 7"));

        renderer
            .render_tooltip(&TooltipState::hidden())
            .expect("hide");
        assert!(!renderer.document().expect("document").contains("tooltip"));

        renderer.clear().expect("clear");
        assert!(renderer.document().is_none());
    }
}
