use crate::core::{ChartFrame, PlotLayout, PlotPoint};
use crate::error::StoryResult;
use crate::render::axis::{TITLE_FONT_PX, build_axes};
use crate::render::{
    BarPrimitive, CirclePrimitive, Color, HoverTarget, LinePrimitive, RectPrimitive, RenderFrame,
    SeriesPath, TextHAlign, TextPrimitive, TextRole, TooltipPrimitive,
};

const LEGEND_ROW_HEIGHT_PX: f64 = 20.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_LABEL_OFFSET_X: f64 = 16.0;
const LEGEND_LABEL_OFFSET_Y: f64 = 10.0;
const LEGEND_FONT_PX: f64 = 12.0;
const ANNOTATION_FONT_PX: f64 = 10.0;
const ANNOTATION_MARKER_RADIUS_PX: f64 = 2.0;
const ANNOTATION_LABEL_GAP_PX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Color key: one swatch + label row per entry, stacked from `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub origin: PlotPoint,
    pub entries: Vec<LegendEntry>,
}

/// Callout pointing at a data point: leader line, marker ring and label.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub anchor: PlotPoint,
    pub offset_x: f64,
    pub offset_y: f64,
    pub label: String,
}

/// Retained-mode drawing surface used by the scene renderers.
///
/// Implementations own every mark drawn since the last `clear`. Scene
/// renderers only talk to this trait, so any graphics backend can sit behind it.
pub trait ChartCanvas {
    fn layout(&self) -> PlotLayout;

    /// Removes every mark, label, legend, hover target and tooltip. Idempotent.
    fn clear(&mut self);

    fn draw_title(&mut self, text: &str) -> StoryResult<()>;

    fn draw_axes(&mut self, frame: &ChartFrame, x_label: &str, y_label: &str) -> StoryResult<()>;

    fn draw_line(&mut self, series: SeriesPath) -> StoryResult<()>;

    fn draw_bars(&mut self, bars: Vec<BarPrimitive>) -> StoryResult<()>;

    fn draw_legend(&mut self, legend: &Legend) -> StoryResult<()>;

    fn draw_annotation(&mut self, annotation: &Annotation) -> StoryResult<()>;

    fn register_hover_targets(&mut self, targets: Vec<HoverTarget>) -> StoryResult<()>;

    fn hover_targets(&self) -> &[HoverTarget];

    /// Replaces any visible tooltip with `tooltip`.
    fn show_tooltip(&mut self, tooltip: TooltipPrimitive) -> StoryResult<()>;

    fn hide_tooltip(&mut self);
}

/// `ChartCanvas` that records everything into a [`RenderFrame`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCanvas {
    frame: RenderFrame,
    tick_count: usize,
}

impl FrameCanvas {
    #[must_use]
    pub fn new(layout: PlotLayout) -> Self {
        Self {
            frame: RenderFrame::new(layout),
            tick_count: 10,
        }
    }

    /// Approximate number of ticks requested per axis.
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }
}

impl ChartCanvas for FrameCanvas {
    fn layout(&self) -> PlotLayout {
        self.frame.layout
    }

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw_title(&mut self, text: &str) -> StoryResult<()> {
        let layout = self.frame.layout;
        let title = TextPrimitive::new(
            text,
            layout.plot_width() / 2.0,
            -layout.margins().top / 2.0,
            TITLE_FONT_PX,
            Color::BLACK,
            TextHAlign::Center,
        )
        .with_role(TextRole::Title);
        title.validate()?;
        self.frame.texts.push(title);
        Ok(())
    }

    fn draw_axes(
        &mut self,
        frame: &ChartFrame,
        x_label: &str,
        y_label: &str,
    ) -> StoryResult<()> {
        let axes = build_axes(frame, x_label, y_label, self.tick_count)?;
        for line in &axes.lines {
            line.validate()?;
        }
        for text in &axes.texts {
            text.validate()?;
        }
        self.frame.lines.extend(axes.lines);
        self.frame.texts.extend(axes.texts);
        Ok(())
    }

    fn draw_line(&mut self, series: SeriesPath) -> StoryResult<()> {
        series.validate()?;
        self.frame.series.push(series);
        Ok(())
    }

    fn draw_bars(&mut self, bars: Vec<BarPrimitive>) -> StoryResult<()> {
        for bar in &bars {
            bar.validate()?;
        }
        self.frame.bars.extend(bars);
        Ok(())
    }

    fn draw_legend(&mut self, legend: &Legend) -> StoryResult<()> {
        for (row, entry) in legend.entries.iter().enumerate() {
            let top = legend.origin.y + row as f64 * LEGEND_ROW_HEIGHT_PX;
            let swatch = RectPrimitive::new(
                legend.origin.x,
                top,
                LEGEND_SWATCH_PX,
                LEGEND_SWATCH_PX,
                entry.color,
            );
            let label = TextPrimitive::new(
                entry.label.as_str(),
                legend.origin.x + LEGEND_LABEL_OFFSET_X,
                top + LEGEND_LABEL_OFFSET_Y,
                LEGEND_FONT_PX,
                Color::BLACK,
                TextHAlign::Left,
            )
            .with_role(TextRole::Legend);
            swatch.validate()?;
            label.validate()?;
            self.frame.rects.push(swatch);
            self.frame.texts.push(label);
        }
        Ok(())
    }

    fn draw_annotation(&mut self, annotation: &Annotation) -> StoryResult<()> {
        let anchor = annotation.anchor;
        let elbow = anchor.offset(annotation.offset_x, annotation.offset_y);
        let leader = LinePrimitive::new(anchor.x, anchor.y, elbow.x, elbow.y, 1.0, Color::BLACK);
        let marker = CirclePrimitive::outlined(
            anchor.x,
            anchor.y,
            ANNOTATION_MARKER_RADIUS_PX,
            1.0,
            Color::BLACK,
        );
        let label = TextPrimitive::new(
            annotation.label.as_str(),
            elbow.x - ANNOTATION_LABEL_GAP_PX,
            elbow.y - ANNOTATION_LABEL_GAP_PX,
            ANNOTATION_FONT_PX,
            Color::BLACK,
            TextHAlign::Right,
        )
        .with_role(TextRole::Annotation);

        leader.validate()?;
        marker.validate()?;
        label.validate()?;
        self.frame.lines.push(leader);
        self.frame.circles.push(marker);
        self.frame.texts.push(label);
        Ok(())
    }

    fn register_hover_targets(&mut self, targets: Vec<HoverTarget>) -> StoryResult<()> {
        for target in &targets {
            target.validate()?;
        }
        self.frame.hover_targets.extend(targets);
        Ok(())
    }

    fn hover_targets(&self) -> &[HoverTarget] {
        &self.frame.hover_targets
    }

    fn show_tooltip(&mut self, tooltip: TooltipPrimitive) -> StoryResult<()> {
        tooltip.validate()?;
        self.frame.tooltip = Some(tooltip);
        Ok(())
    }

    fn hide_tooltip(&mut self) {
        self.frame.tooltip = None;
    }
}
