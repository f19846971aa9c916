use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, MortalityRecord};
use crate::error::{StoryError, StoryResult};

/// Deterministic bar geometry in plot space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub cause: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects one bar per record: banded x over cause, rising from the bottom
/// edge of the plot (`plot_height`) to the rate on `y_scale`.
pub fn project_bars(
    records: &[&MortalityRecord],
    band: &BandScale,
    y_scale: LinearScale,
    plot_height: f64,
) -> StoryResult<Vec<BarGeometry>> {
    if !plot_height.is_finite() || plot_height <= 0.0 {
        return Err(StoryError::InvalidData(
            "plot height must be finite and > 0".to_owned(),
        ));
    }

    let width = band.bandwidth();
    let mut projected = Vec::with_capacity(records.len());
    for record in records {
        let x = band.position(&record.cause).ok_or_else(|| {
            StoryError::InvalidData(format!(
                "cause `{}` is not part of the band domain",
                record.cause
            ))
        })?;
        let y = y_scale.map(record.age_adjusted_death_rate)?;
        projected.push(BarGeometry {
            cause: record.cause.clone(),
            value: record.age_adjusted_death_rate,
            x,
            y,
            width,
            height: (plot_height - y).max(0.0),
        });
    }

    Ok(projected)
}
