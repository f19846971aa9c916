//! Scene renderers: each turns the dataset into one complete chart on a
//! [`ChartCanvas`].
//!
//! Renderers are stateless. They expect a freshly cleared canvas and only
//! read from the shared [`SceneContext`].

mod all_causes;
mod model;
mod overview;
mod top_five;

pub use all_causes::{HOVER_TARGET_RADIUS_PX, render_all_causes};
pub use model::{Scene, SceneModel};
pub use overview::render_overview;
pub use top_five::render_top_five;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::StoryConfig;
use crate::core::{ChartFrame, PlotLayout, ScaleMode};
use crate::data::DataSource;
use crate::error::StoryResult;
use crate::render::{CategoryColorScale, ChartCanvas};

pub const YEAR_AXIS_LABEL: &str = "Year";
pub const CAUSE_AXIS_LABEL: &str = "Cause";
pub const RATE_AXIS_LABEL: &str = "Death Rate (per 100,000)";

/// Read-only inputs shared by every scene of one session.
#[derive(Debug, Clone, Copy)]
pub struct SceneContext<'a> {
    pub data: &'a DataSource,
    pub layout: PlotLayout,
    pub colors: &'a CategoryColorScale,
    pub config: &'a StoryConfig,
}

impl SceneContext<'_> {
    /// Default scales: x over the dataset's year extent, y over
    /// `[0, global max * overview headroom]`.
    pub fn default_frame(&self) -> StoryResult<ChartFrame> {
        ChartFrame::scales(
            self.layout,
            self.data.records(),
            ScaleMode::Continuous,
            self.config.overview_tuning(),
        )
    }
}

/// What a scene render put on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSummary {
    pub scene: Scene,
    pub series_drawn: usize,
    pub bars_drawn: usize,
    pub annotation_drawn: bool,
    pub hover_targets: usize,
}

impl SceneSummary {
    #[must_use]
    pub fn empty(scene: Scene) -> Self {
        Self {
            scene,
            series_drawn: 0,
            bars_drawn: 0,
            annotation_drawn: false,
            hover_targets: 0,
        }
    }
}

/// Renders `scene` onto `canvas`. The canvas is not cleared here.
pub fn render_scene(
    scene: Scene,
    context: &SceneContext<'_>,
    canvas: &mut dyn ChartCanvas,
) -> StoryResult<SceneSummary> {
    let summary = match scene {
        Scene::Overview => render_overview(context, canvas)?,
        Scene::TopFive => render_top_five(context, canvas)?,
        Scene::AllCauses => render_all_causes(context, canvas)?,
    };
    debug!(
        scene = scene.slug(),
        series = summary.series_drawn,
        bars = summary.bars_drawn,
        annotation = summary.annotation_drawn,
        hover_targets = summary.hover_targets,
        "scene rendered"
    );
    Ok(summary)
}
