use std::fmt::Write as _;

use crate::error::{StoryError, StoryResult};
use crate::render::{
    Color, RenderFrame, Renderer, TextHAlign, TextPrimitive, TextRole, TextVAlign,
    TooltipPrimitive,
};

const TOOLTIP_FONT_PX: f64 = 12.0;
const TOOLTIP_LINE_HEIGHT_PX: f64 = 15.0;
const TOOLTIP_PADDING_PX: f64 = 6.0;
const TOOLTIP_CHAR_WIDTH_PX: f64 = 6.8;
const HIGHLIGHT_RADIUS_PX: f64 = 3.0;

/// Renders frames into standalone SVG documents.
///
/// The last document is kept so hosts can write it out or embed it.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_document(&self) -> &str {
        &self.last_document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.last_document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StoryResult<()> {
        self.last_document = frame_to_svg(frame)?;
        Ok(())
    }
}

/// Serializes one validated frame as an SVG document.
pub fn frame_to_svg(frame: &RenderFrame) -> StoryResult<String> {
    frame.validate()?;
    write_document(frame).map_err(|err| StoryError::Backend(format!("svg write failed: {err}")))
}

fn write_document(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let viewport = frame.layout.viewport();
    let margins = frame.layout.margins();
    let mut svg = String::new();

    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">",
        w = viewport.width,
        h = viewport.height
    )?;
    writeln!(
        svg,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        Color::WHITE.to_hex()
    )?;
    writeln!(
        svg,
        "  <g transform=\"translate({},{})\">",
        num(margins.left),
        num(margins.top)
    )?;

    for series in &frame.series {
        if series.points.is_empty() {
            continue;
        }
        let mut d = String::new();
        for (index, point) in series.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            write!(d, "{command}{},{}", num(point.x), num(point.y))?;
        }
        writeln!(
            svg,
            "    <path class=\"series\" data-cause=\"{}\" d=\"{d}\" fill=\"none\" {}/>",
            escape(&series.cause),
            stroke_attrs(series.color, series.stroke_width)
        )?;
    }

    for bar in &frame.bars {
        let rect = bar.rect;
        writeln!(
            svg,
            "    <rect class=\"bar\" data-cause=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            escape(&bar.cause),
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            fill_attrs(rect.fill_color)
        )?;
    }

    for rect in &frame.rects {
        write!(
            svg,
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}",
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            fill_attrs(rect.fill_color)
        )?;
        if rect.border_width > 0.0 {
            write!(svg, " {}", stroke_attrs(rect.border_color, rect.border_width))?;
        }
        writeln!(svg, "/>")?;
    }

    for line in &frame.lines {
        writeln!(
            svg,
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            stroke_attrs(line.color, line.stroke_width)
        )?;
    }

    for circle in &frame.circles {
        write!(
            svg,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}",
            num(circle.cx),
            num(circle.cy),
            num(circle.radius),
            fill_attrs(circle.fill_color)
        )?;
        if circle.stroke_width > 0.0 {
            write!(
                svg,
                " {}",
                stroke_attrs(circle.stroke_color, circle.stroke_width)
            )?;
        }
        writeln!(svg, "/>")?;
    }

    for text in &frame.texts {
        write_text(&mut svg, text)?;
    }

    // Static documents cannot react to the pointer; native <title> tooltips
    // carry the same details instead.
    for target in &frame.hover_targets {
        writeln!(
            svg,
            "    <circle class=\"hover-target\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"transparent\"><title>{}&#10;Year: {}&#10;Rate: {}</title></circle>",
            num(target.center.x),
            num(target.center.y),
            num(target.radius),
            escape(&target.cause),
            target.year,
            target.rate
        )?;
    }

    if let Some(tooltip) = &frame.tooltip {
        write_tooltip(&mut svg, tooltip)?;
    }

    writeln!(svg, "  </g>")?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn write_text(svg: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let baseline = match text.v_align {
        TextVAlign::Baseline => "",
        TextVAlign::Middle => " dominant-baseline=\"central\"",
        TextVAlign::Top => " dominant-baseline=\"hanging\"",
    };
    let class = match text.role {
        TextRole::Title => " class=\"chart-title\" font-weight=\"bold\"",
        TextRole::AxisLabel => " class=\"axis-label\"",
        TextRole::TickLabel => " class=\"tick\"",
        TextRole::Legend => " class=\"legend\"",
        TextRole::Annotation => " class=\"annotation\"",
    };

    // Rotated labels are positioned at the origin of their own rotated frame.
    let (x, y, transform) = if text.rotation_deg != 0.0 {
        (
            0.0,
            0.0,
            format!(
                " transform=\"translate({},{}) rotate({})\"",
                num(text.x),
                num(text.y),
                num(text.rotation_deg)
            ),
        )
    } else {
        (text.x, text.y, String::new())
    };

    writeln!(
        svg,
        "    <text{class} x=\"{}\" y=\"{}\"{transform} text-anchor=\"{anchor}\"{baseline} font-size=\"{}\" fill=\"{}\">{}</text>",
        num(x),
        num(y),
        num(text.font_size_px),
        text.color.to_hex(),
        escape(&text.text)
    )
}

fn write_tooltip(svg: &mut String, tooltip: &TooltipPrimitive) -> std::fmt::Result {
    let (width, height) = tooltip_box_size(tooltip);
    writeln!(
        svg,
        "    <circle class=\"hover-highlight\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" {}/>",
        num(tooltip.highlight.x),
        num(tooltip.highlight.y),
        num(HIGHLIGHT_RADIUS_PX),
        stroke_attrs(tooltip.accent, 1.5)
    )?;
    writeln!(
        svg,
        "    <g class=\"tooltip\" transform=\"translate({},{})\">",
        num(tooltip.anchor.x),
        num(tooltip.anchor.y)
    )?;
    writeln!(
        svg,
        "      <rect width=\"{}\" height=\"{}\" rx=\"3\" fill=\"#ffffff\" fill-opacity=\"0.92\" stroke=\"#999999\"/>",
        num(width),
        num(height)
    )?;
    let rows = std::iter::once((tooltip.heading.as_str(), true))
        .chain(tooltip.lines.iter().map(|line| (line.as_str(), false)));
    for (row, (line, bold)) in rows.enumerate() {
        let weight = if bold { " font-weight=\"bold\"" } else { "" };
        writeln!(
            svg,
            "      <text x=\"{}\" y=\"{}\" font-size=\"{}\"{weight}>{}</text>",
            num(TOOLTIP_PADDING_PX),
            num(TOOLTIP_PADDING_PX + TOOLTIP_FONT_PX + row as f64 * TOOLTIP_LINE_HEIGHT_PX),
            num(TOOLTIP_FONT_PX),
            escape(line)
        )?;
    }
    writeln!(svg, "    </g>")
}

/// Rough box size for a tooltip; SVG has no layout pass to measure text.
#[must_use]
pub(crate) fn tooltip_box_size(tooltip: &TooltipPrimitive) -> (f64, f64) {
    let longest = tooltip
        .lines
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(tooltip.heading.chars().count()))
        .max()
        .unwrap_or(0);
    let rows = tooltip.lines.len() + 1;
    (
        longest as f64 * TOOLTIP_CHAR_WIDTH_PX + TOOLTIP_PADDING_PX * 2.0,
        rows as f64 * TOOLTIP_LINE_HEIGHT_PX + TOOLTIP_PADDING_PX * 2.0,
    )
}

fn fill_attrs(color: Color) -> String {
    if color.is_transparent() {
        return "fill=\"transparent\"".to_owned();
    }
    if color.alpha < 1.0 {
        format!(
            "fill=\"{}\" fill-opacity=\"{}\"",
            color.to_hex(),
            num(color.alpha)
        )
    } else {
        format!("fill=\"{}\"", color.to_hex())
    }
}

fn stroke_attrs(color: Color, width: f64) -> String {
    let mut attrs = format!("stroke=\"{}\" stroke-width=\"{}\"", color.to_hex(), num(width));
    if color.alpha < 1.0 {
        let _ = write!(attrs, " stroke-opacity=\"{}\"", num(color.alpha));
    }
    attrs
}

/// Compact numeric attribute: at most two decimals, no trailing zeros.
fn num(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape, num};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(num(70.0), "70");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape("Alzheimer's <&>"), "Alzheimer&apos;s &lt;&amp;&gt;");
    }
}
