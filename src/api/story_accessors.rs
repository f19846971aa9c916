use crate::core::PlotLayout;
use crate::data::DataSource;
use crate::interaction::HoverState;
use crate::render::{CategoryColorScale, FrameCanvas, RenderFrame, Renderer};
use crate::scene::{Scene, SceneSummary};

use super::{StoryConfig, StoryController};

impl<R: Renderer> StoryController<R> {
    #[must_use]
    pub fn current_scene(&self) -> Scene {
        self.model.current()
    }

    #[must_use]
    pub fn canvas(&self) -> &FrameCanvas {
        &self.canvas
    }

    /// Retained marks of the scene currently on screen.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        self.canvas.frame()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn data(&self) -> &DataSource {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn colors(&self) -> &CategoryColorScale {
        &self.colors
    }

    #[must_use]
    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    #[must_use]
    pub fn last_summary(&self) -> SceneSummary {
        self.last_summary
    }
}
