use tracing::warn;

use crate::core::{PlotPoint, project_series};
use crate::error::StoryResult;
use crate::render::{Annotation, ChartCanvas, Legend, LegendEntry, SeriesPath};

use super::{RATE_AXIS_LABEL, Scene, SceneContext, SceneSummary, YEAR_AXIS_LABEL};

const OVERVIEW_STROKE_WIDTH: f64 = 2.0;
const LEGEND_INSET_RIGHT_PX: f64 = 120.0;
const LEGEND_INSET_TOP_PX: f64 = 20.0;

/// Highlighted causes over time on the shared default scales, with a callout
/// on the configured anchor record and a legend in the top-right corner.
pub fn render_overview(
    context: &SceneContext<'_>,
    canvas: &mut dyn ChartCanvas,
) -> StoryResult<SceneSummary> {
    let config = context.config;
    let frame = context.default_frame()?;
    let mut summary = SceneSummary::empty(Scene::Overview);

    let (first_year, last_year) = context.data.year_extent();
    let causes = config
        .highlighted_causes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" vs. ");
    canvas.draw_title(&format!("{causes} ({first_year}\u{2013}{last_year})"))?;
    canvas.draw_axes(&frame, YEAR_AXIS_LABEL, RATE_AXIS_LABEL)?;

    for cause in &config.highlighted_causes {
        let series = context.data.series(cause);
        if series.is_empty() {
            warn!(cause = %cause, "highlighted cause has no records");
            continue;
        }
        let points = project_series(&series, &frame)?;
        canvas.draw_line(SeriesPath::new(
            cause.as_str(),
            points,
            OVERVIEW_STROKE_WIDTH,
            context.colors.color(cause),
        ))?;
        summary.series_drawn += 1;
    }

    let annotation = &config.annotation;
    match context.data.find(&annotation.cause, annotation.year) {
        Some(record) => {
            canvas.draw_annotation(&Annotation {
                anchor: frame.project(record)?,
                offset_x: annotation.offset_x,
                offset_y: annotation.offset_y,
                label: annotation.label.clone(),
            })?;
            summary.annotation_drawn = true;
        }
        None => warn!(
            cause = %annotation.cause,
            year = annotation.year,
            "annotation anchor missing, skipping annotation"
        ),
    }

    let plot_width = context.layout.plot_width();
    canvas.draw_legend(&Legend {
        origin: PlotPoint::new(plot_width - LEGEND_INSET_RIGHT_PX, LEGEND_INSET_TOP_PX),
        entries: config
            .highlighted_causes
            .iter()
            .map(|cause| LegendEntry {
                label: cause.clone(),
                color: context.colors.color(cause),
            })
            .collect(),
    })?;

    Ok(summary)
}
