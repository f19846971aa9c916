use serde::{Deserialize, Serialize};

use crate::core::ticks::{nice_ticks, tick_step};
use crate::error::{StoryError, StoryResult};

/// Continuous domain-to-pixel mapping.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// rate axis grows upward in plot space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale over `domain_start..domain_end` mapped onto the unit range.
    pub fn new(domain_start: f64, domain_end: f64) -> StoryResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(StoryError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> StoryResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(StoryError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> StoryResult<f64> {
        if !value.is_finite() {
            return Err(StoryError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> StoryResult<f64> {
        if !pixel.is_finite() {
            return Err(StoryError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(StoryError::InvalidData(
                "cannot invert a collapsed range".to_owned(),
            ));
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Human-friendly tick values covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Spacing between the values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        tick_step(self.domain_start, self.domain_end, count)
    }
}
