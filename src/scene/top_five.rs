use tracing::warn;

use crate::core::{
    BandScale, ChartFrame, LinearScale, PlotLayout, ScaleMode, XScale, project_bars,
};
use crate::error::StoryResult;
use crate::render::{BarPrimitive, ChartCanvas, RectPrimitive};

use super::{CAUSE_AXIS_LABEL, RATE_AXIS_LABEL, Scene, SceneContext, SceneSummary};

/// Bar chart of the `top_n` highest rates in the focus year, on dedicated
/// band and rate scales.
pub fn render_top_five(
    context: &SceneContext<'_>,
    canvas: &mut dyn ChartCanvas,
) -> StoryResult<SceneSummary> {
    let config = context.config;
    let mut summary = SceneSummary::empty(Scene::TopFive);

    let leaders = context.data.top_for_year(config.focus_year, config.top_n);
    canvas.draw_title(&format!(
        "Top {} Causes of Death in {}",
        config.top_n, config.focus_year
    ))?;

    if leaders.is_empty() {
        warn!(
            year = config.focus_year,
            "no records for focus year, drawing empty chart"
        );
        let frame = empty_frame(context.layout, config.band_padding)?;
        canvas.draw_axes(&frame, CAUSE_AXIS_LABEL, RATE_AXIS_LABEL)?;
        return Ok(summary);
    }

    let frame = ChartFrame::scales(
        context.layout,
        leaders.iter().copied(),
        ScaleMode::Categorical,
        config.bar_tuning(),
    )?;
    canvas.draw_axes(&frame, CAUSE_AXIS_LABEL, RATE_AXIS_LABEL)?;

    let XScale::Band(band) = frame.x() else {
        return Ok(summary);
    };
    let bars = project_bars(&leaders, band, frame.y(), context.layout.plot_height())?
        .into_iter()
        .map(|bar| BarPrimitive {
            rect: RectPrimitive::new(
                bar.x,
                bar.y,
                bar.width,
                bar.height,
                context.colors.color(&bar.cause),
            ),
            cause: bar.cause,
            value: bar.value,
        })
        .collect::<Vec<_>>();
    summary.bars_drawn = bars.len();
    canvas.draw_bars(bars)?;

    Ok(summary)
}

fn empty_frame(layout: PlotLayout, band_padding: f64) -> StoryResult<ChartFrame> {
    let band = BandScale::new(Vec::<String>::new(), 0.0, layout.plot_width(), band_padding)?;
    let y = LinearScale::new(0.0, 1.0)?.with_range(layout.plot_height(), 0.0)?;
    Ok(ChartFrame::new(layout, XScale::Band(band), y))
}
