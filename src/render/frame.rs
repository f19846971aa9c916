use crate::core::PlotLayout;
use crate::error::StoryResult;
use crate::render::{
    BarPrimitive, CirclePrimitive, HoverTarget, LinePrimitive, RectPrimitive, SeriesPath,
    TextPrimitive, TooltipPrimitive,
};

/// Backend-agnostic retained scene for one draw pass.
///
/// All geometry is in plot space; `layout` tells backends how to place the
/// plot area on the surface. Backends paint in field order: series, bars,
/// rects, lines, circles, texts, then the tooltip on top. Hover targets are
/// never painted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub layout: PlotLayout,
    pub series: Vec<SeriesPath>,
    pub bars: Vec<BarPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub hover_targets: Vec<HoverTarget>,
    pub tooltip: Option<TooltipPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(layout: PlotLayout) -> Self {
        Self {
            layout,
            series: Vec::new(),
            bars: Vec::new(),
            rects: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            hover_targets: Vec::new(),
            tooltip: None,
        }
    }

    pub fn validate(&self) -> StoryResult<()> {
        for series in &self.series {
            series.validate()?;
        }
        for bar in &self.bars {
            bar.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for target in &self.hover_targets {
            target.validate()?;
        }
        if let Some(tooltip) = &self.tooltip {
            tooltip.validate()?;
        }
        Ok(())
    }

    /// Drops every mark while keeping the layout.
    pub fn clear(&mut self) {
        self.series.clear();
        self.bars.clear();
        self.rects.clear();
        self.lines.clear();
        self.circles.clear();
        self.texts.clear();
        self.hover_targets.clear();
        self.tooltip = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
            && self.bars.is_empty()
            && self.rects.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.hover_targets.is_empty()
            && self.tooltip.is_none()
    }

    /// Text of the chart title, if one was drawn.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.texts
            .iter()
            .find(|text| text.role == crate::render::TextRole::Title)
            .map(|text| text.text.as_str())
    }
}
