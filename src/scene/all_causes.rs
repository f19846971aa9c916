use crate::core::project_series;
use crate::error::StoryResult;
use crate::render::{ChartCanvas, HoverTarget, SeriesPath};

use super::{RATE_AXIS_LABEL, Scene, SceneContext, SceneSummary, YEAR_AXIS_LABEL};

const ALL_CAUSES_STROKE_WIDTH: f64 = 1.2;

/// Radius of the invisible hit area around each data point.
pub const HOVER_TARGET_RADIUS_PX: f64 = 3.0;

/// Every cause as its own line, in first-appearance order, with one hover
/// target per data point.
pub fn render_all_causes(
    context: &SceneContext<'_>,
    canvas: &mut dyn ChartCanvas,
) -> StoryResult<SceneSummary> {
    let frame = context.default_frame()?;
    let mut summary = SceneSummary::empty(Scene::AllCauses);

    canvas.draw_title("All Causes Over Time (Hover for details)")?;
    canvas.draw_axes(&frame, YEAR_AXIS_LABEL, RATE_AXIS_LABEL)?;

    for cause in context.data.causes() {
        let series = context.data.series(cause);
        let points = project_series(&series, &frame)?;
        let targets = series
            .iter()
            .zip(&points)
            .map(|(record, point)| HoverTarget {
                cause: record.cause.clone(),
                year: record.year,
                rate: record.age_adjusted_death_rate,
                center: *point,
                radius: HOVER_TARGET_RADIUS_PX,
            })
            .collect::<Vec<_>>();

        canvas.draw_line(SeriesPath::new(
            cause,
            points,
            ALL_CAUSES_STROKE_WIDTH,
            context.colors.color(cause),
        ))?;
        summary.series_drawn += 1;
        summary.hover_targets += targets.len();
        canvas.register_hover_targets(targets)?;
    }

    Ok(summary)
}
