use crate::core::{ChartFrame, MortalityRecord, PlotPoint};
use crate::error::StoryResult;

/// Projects an already year-sorted series into plot-space polyline vertices.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests consume the exact same geometry.
pub fn project_series(
    records: &[&MortalityRecord],
    frame: &ChartFrame,
) -> StoryResult<Vec<PlotPoint>> {
    records.iter().map(|record| frame.project(record)).collect()
}
