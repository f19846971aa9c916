use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{StoryError, StoryResult};
use crate::render::svg_backend::tooltip_box_size;
use crate::render::{
    Color, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextRole, TextVAlign,
    TooltipPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub series_drawn: usize,
    pub bars_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
    pub tooltip_drawn: bool,
}

/// Extension trait for renderers that can paint into an external Cairo
/// context (for example a GTK `DrawingArea` draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> StoryResult<()>;
}

/// Cairo + Pango raster backend.
///
/// Renders either offscreen into its own image surface (`Renderer::render`,
/// then `surface().write_to_png(..)`) or onto a caller-provided context.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> StoryResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(StoryError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> StoryResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png<W: std::io::Write>(&self, writer: &mut W) -> StoryResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| StoryError::Backend(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> StoryResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let margins = frame.layout.margins();
        context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))?;
        context.translate(margins.left, margins.top);

        let mut stats = CairoRenderStats::default();

        for series in &frame.series {
            let mut points = series.points.iter();
            let Some(first) = points.next() else {
                continue;
            };
            context.move_to(first.x, first.y);
            for point in points {
                context.line_to(point.x, point.y);
            }
            apply_color(context, series.color);
            context.set_line_width(series.stroke_width);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke series", err))?;
            stats.series_drawn += 1;
        }

        for rect in frame.bars.iter().map(|bar| bar.rect).chain(frame.rects.iter().copied()) {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
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
        }
        stats.bars_drawn = frame.bars.len();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            context.new_sub_path();
            context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
            apply_color(context, circle.fill_color);
            context
                .fill_preserve()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
            if circle.stroke_width > 0.0 {
                apply_color(context, circle.stroke_color);
                context.set_line_width(circle.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke circle", err))?;
            } else {
                context.new_path();
            }
            stats.circles_drawn += 1;
        }

        for text in &frame.texts {
            draw_text(context, text)?;
            stats.texts_drawn += 1;
        }

        if let Some(tooltip) = &frame.tooltip {
            draw_tooltip(context, tooltip)?;
            stats.tooltip_drawn = true;
        }

        context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StoryResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> StoryResult<()> {
        self.render_with_context(context, frame)
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> StoryResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.role == TextRole::Title {
        "Bold "
    } else {
        ""
    };
    let font_description =
        FontDescription::from_string(&format!("Sans {weight}{}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let dy = match text.v_align {
        TextVAlign::Baseline => -f64::from(layout.baseline()) / f64::from(pango::SCALE),
        TextVAlign::Middle => -f64::from(text_height) / 2.0,
        TextVAlign::Top => 0.0,
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(text.x, text.y);
    if text.rotation_deg != 0.0 {
        context.rotate(text.rotation_deg.to_radians());
    }
    apply_color(context, text.color);
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn draw_tooltip(context: &Context, tooltip: &TooltipPrimitive) -> StoryResult<()> {
    context.new_sub_path();
    context.arc(tooltip.highlight.x, tooltip.highlight.y, 3.0, 0.0, TAU);
    apply_color(context, tooltip.accent);
    context.set_line_width(1.5);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke hover highlight", err))?;

    let (width, height) = tooltip_box_size(tooltip);
    context.rectangle(tooltip.anchor.x, tooltip.anchor.y, width, height);
    apply_color(context, Color::rgba(1.0, 1.0, 1.0, 0.92));
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill tooltip", err))?;
    apply_color(context, Color::rgb(0.6, 0.6, 0.6));
    context.set_line_width(1.0);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke tooltip", err))?;

    let rows = std::iter::once(tooltip.heading.as_str())
        .chain(tooltip.lines.iter().map(String::as_str));
    for (row, line) in rows.enumerate() {
        let label = TextPrimitive::new(
            line,
            tooltip.anchor.x + 6.0,
            tooltip.anchor.y + 6.0 + row as f64 * 15.0,
            12.0,
            Color::BLACK,
            TextHAlign::Left,
        )
        .with_v_align(TextVAlign::Top);
        draw_text(context, &label)?;
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> StoryError {
    StoryError::Backend(format!("{prefix}: {err}"))
}
