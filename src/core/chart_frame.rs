use serde::{Deserialize, Serialize};

use crate::core::{BandScale, LinearScale, MortalityRecord, PlotLayout, PlotPoint};
use crate::error::{StoryError, StoryResult};

/// How the x axis of a chart is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    /// Line charts: linear x over year.
    Continuous,
    /// Bar charts: banded x over cause names.
    Categorical,
}

/// Tuning applied when fitting scales to a record subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTuning {
    /// Multiplier applied to the subset's max rate to get the y domain top.
    pub headroom: f64,
    /// Band padding for categorical mode.
    pub band_padding: f64,
}

impl Default for ScaleTuning {
    fn default() -> Self {
        Self {
            headroom: 1.05,
            band_padding: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum XScale {
    Linear(LinearScale),
    Band(BandScale),
}

/// Per-render value object: plot layout plus the x/y scales of one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    layout: PlotLayout,
    x: XScale,
    y: LinearScale,
}

impl ChartFrame {
    #[must_use]
    pub fn new(layout: PlotLayout, x: XScale, y: LinearScale) -> Self {
        Self { layout, x, y }
    }

    /// Fits x/y scales to `records` for the given chart mode.
    ///
    /// The y domain always starts at zero and ends at `max * headroom`
    /// (`[0, 1]` when the subset has no positive rate). Continuous mode
    /// rejects an empty subset; categorical mode yields an empty band scale.
    pub fn scales<'a, I>(
        layout: PlotLayout,
        records: I,
        mode: ScaleMode,
        tuning: ScaleTuning,
    ) -> StoryResult<Self>
    where
        I: IntoIterator<Item = &'a MortalityRecord>,
    {
        if !tuning.headroom.is_finite() || tuning.headroom <= 0.0 {
            return Err(StoryError::InvalidData(
                "scale headroom must be finite and > 0".to_owned(),
            ));
        }

        let width = layout.plot_width();
        let height = layout.plot_height();

        let mut year_min = i32::MAX;
        let mut year_max = i32::MIN;
        let mut rate_max = f64::NEG_INFINITY;
        let mut causes = Vec::new();
        for record in records {
            year_min = year_min.min(record.year);
            year_max = year_max.max(record.year);
            rate_max = rate_max.max(record.age_adjusted_death_rate);
            if mode == ScaleMode::Categorical {
                causes.push(record.cause.clone());
            }
        }

        let y_top = if rate_max.is_finite() && rate_max > 0.0 {
            rate_max * tuning.headroom
        } else {
            1.0
        };
        let y = LinearScale::new(0.0, y_top)?.with_range(height, 0.0)?;

        let x = match mode {
            ScaleMode::Continuous => {
                if year_min > year_max {
                    return Err(StoryError::InvalidData(
                        "continuous scales need at least one record".to_owned(),
                    ));
                }
                let (start, end) = if year_min == year_max {
                    (f64::from(year_min) - 0.5, f64::from(year_max) + 0.5)
                } else {
                    (f64::from(year_min), f64::from(year_max))
                };
                XScale::Linear(LinearScale::new(start, end)?.with_range(0.0, width)?)
            }
            ScaleMode::Categorical => {
                XScale::Band(BandScale::new(causes, 0.0, width, tuning.band_padding)?)
            }
        };

        Ok(Self { layout, x, y })
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn x(&self) -> &XScale {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        match self.x {
            XScale::Linear(_) => ScaleMode::Continuous,
            XScale::Band(_) => ScaleMode::Categorical,
        }
    }

    /// Maps a record to plot space using the year on a linear x axis or the
    /// band center on a categorical one.
    pub fn project(&self, record: &MortalityRecord) -> StoryResult<PlotPoint> {
        let x = match &self.x {
            XScale::Linear(scale) => scale.map(f64::from(record.year))?,
            XScale::Band(scale) => scale.center(&record.cause).ok_or_else(|| {
                StoryError::InvalidData(format!(
                    "cause `{}` is not part of the band domain",
                    record.cause
                ))
            })?,
        };
        let y = self.y.map(record.age_adjusted_death_rate)?;
        Ok(PlotPoint::new(x, y))
    }
}
