use crate::error::StoryResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and batch runs.
///
/// It validates every frame it receives and keeps a few counters so callers
/// can assert on what would have been painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_series_count: usize,
    pub last_bar_count: usize,
    pub last_text_count: usize,
    pub last_tooltip_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> StoryResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_series_count = frame.series.len();
        self.last_bar_count = frame.bars.len();
        self.last_text_count = frame.texts.len();
        self.last_tooltip_visible = frame.tooltip.is_some();
        Ok(())
    }
}
