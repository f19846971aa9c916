use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{StoryError, StoryResult};

/// Categorical scale splitting a pixel range into one slot per category.
///
/// `padding` applies to both the gaps between bands and the outer edges;
/// leftover space is distributed evenly on both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl BandScale {
    /// Builds a band scale; duplicate categories keep their first position.
    pub fn new<I, S>(
        categories: I,
        range_start: f64,
        range_end: f64,
        padding: f64,
    ) -> StoryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(StoryError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(StoryError::InvalidData(
                "band padding must be finite and in [0, 1)".to_owned(),
            ));
        }

        Ok(Self {
            domain: categories.into_iter().map(Into::into).collect(),
            range_start,
            range_end,
            padding,
        })
    }

    #[must_use]
    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let span = (self.range_end - self.range_start).abs();
        span / (n - self.padding + self.padding * 2.0).max(1.0)
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `category`, or `None` for unknown categories.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.get_index_of(category)?;
        let n = self.domain.len();
        let step = self.step();
        let reverse = self.range_end < self.range_start;
        let (start, stop) = if reverse {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };
        let first = start + (stop - start - step * (n as f64 - self.padding)) * 0.5;
        let slot = if reverse { n - 1 - index } else { index };
        Some(first + step * slot as f64)
    }

    /// Center of the band for `category`; this is where axis ticks sit.
    #[must_use]
    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category)
            .map(|left| left + self.bandwidth() * 0.5)
    }
}
