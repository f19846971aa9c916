use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::PlotLayout;
use crate::data::DataSource;
use crate::error::StoryResult;
use crate::interaction::HoverState;
use crate::render::{CategoryColorScale, ChartCanvas, FrameCanvas, Renderer};
use crate::scene::{Scene, SceneContext, SceneModel, SceneSummary, render_scene};

use super::StoryConfig;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Visibility of the back/next navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub back_visible: bool,
    pub next_visible: bool,
}

impl NavigationState {
    #[must_use]
    pub fn for_scene(scene: Scene) -> Self {
        Self {
            back_visible: !scene.is_first(),
            next_visible: !scene.is_last(),
        }
    }
}

/// Main orchestration facade consumed by host applications.
///
/// `StoryController` owns the dataset, the scene position, the retained
/// canvas and the presentation backend. Every navigation clears the canvas
/// and re-renders the active scene before presenting it.
pub struct StoryController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) data: DataSource,
    pub(super) config: StoryConfig,
    pub(super) layout: PlotLayout,
    pub(super) colors: CategoryColorScale,
    pub(super) model: SceneModel,
    pub(super) canvas: FrameCanvas,
    pub(super) hover: HoverState,
    pub(super) last_summary: SceneSummary,
}

impl<R: Renderer> StoryController<R> {
    /// Validates `config`, seeds the session color scale, then renders and
    /// presents the first scene.
    pub fn new(data: DataSource, config: StoryConfig, renderer: R) -> StoryResult<Self> {
        config.validate()?;
        let layout = config.layout()?;
        let colors = CategoryColorScale::seeded(
            config.highlighted_causes.iter().map(String::as_str),
            data.causes(),
        );
        debug!(
            records = data.len(),
            causes = colors.len(),
            width = layout.viewport().width,
            height = layout.viewport().height,
            "story controller initialized"
        );

        let canvas = FrameCanvas::new(layout).with_tick_count(config.tick_count);
        let mut controller = Self {
            renderer,
            data,
            config,
            layout,
            colors,
            model: SceneModel::new(),
            canvas,
            hover: HoverState::default(),
            last_summary: SceneSummary::empty(Scene::Overview),
        };
        controller.render_current()?;
        Ok(controller)
    }

    /// Advances to the next scene (saturating) and re-renders.
    pub fn on_next(&mut self) -> StoryResult<Scene> {
        let scene = self.model.advance();
        self.render_current()?;
        Ok(scene)
    }

    /// Goes back one scene (saturating) and re-renders.
    pub fn on_back(&mut self) -> StoryResult<Scene> {
        let scene = self.model.retreat();
        self.render_current()?;
        Ok(scene)
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        NavigationState::for_scene(self.model.current())
    }

    /// Presents the current canvas contents again without re-running the scene.
    pub fn render(&mut self) -> StoryResult<()> {
        self.renderer.render(self.canvas.frame())
    }

    /// Paints the current canvas into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> StoryResult<()>
    where
        R: CairoContextRenderer,
    {
        self.renderer
            .render_on_cairo_context(context, self.canvas.frame())
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn render_current(&mut self) -> StoryResult<()> {
        self.hover.reset();
        self.canvas.clear();
        let context = SceneContext {
            data: &self.data,
            layout: self.layout,
            colors: &self.colors,
            config: &self.config,
        };
        self.last_summary = render_scene(self.model.current(), &context, &mut self.canvas)?;
        self.render()
    }
}
