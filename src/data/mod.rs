//! Dataset loading and read-only queries over the loaded records.

use std::cmp::Reverse;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::MortalityRecord;
use crate::error::{LoadError, StoryResult};

/// Rates at or above this value are treated as data artifacts.
pub const DEFAULT_RATE_CEILING: f64 = 2000.0;

pub const YEAR_COLUMN: &str = "Year";
pub const CAUSE_COLUMN: &str = "Cause";
pub const RATE_COLUMN: &str = "Age Adjusted Death Rate";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Cause")]
    cause: String,
    #[serde(rename = "Age Adjusted Death Rate")]
    rate: String,
}

/// Immutable, shared view over the filtered dataset.
///
/// Loaded once per session; clones share the same record storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    records: Arc<[MortalityRecord]>,
    causes: Arc<IndexSet<String>>,
    discarded: usize,
}

impl DataSource {
    /// Loads the CSV at `path` with the default rate ceiling.
    pub fn load(path: impl AsRef<Path>) -> StoryResult<Self> {
        Self::load_with_ceiling(path, DEFAULT_RATE_CEILING)
    }

    pub fn load_with_ceiling(path: impl AsRef<Path>, rate_ceiling: f64) -> StoryResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Self::from_reader_with_ceiling(file, rate_ceiling)?;
        debug!(
            path = %path.display(),
            records = source.len(),
            causes = source.causes.len(),
            discarded = source.discarded,
            "dataset loaded"
        );
        Ok(source)
    }

    pub fn from_reader<R: Read>(reader: R) -> StoryResult<Self> {
        Self::from_reader_with_ceiling(reader, DEFAULT_RATE_CEILING)
    }

    /// Parses CSV rows from `reader`, dropping rows with a blank rate and rows
    /// whose rate is non-finite or `>= rate_ceiling`.
    pub fn from_reader_with_ceiling<R: Read>(reader: R, rate_ceiling: f64) -> StoryResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers().map_err(LoadError::from)?.clone();
        for column in [YEAR_COLUMN, CAUSE_COLUMN, RATE_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(LoadError::MissingColumn(column).into());
            }
        }

        let mut records = Vec::new();
        let mut blank = 0usize;
        let mut discarded = 0usize;
        for row in csv_reader.records() {
            let row = row.map_err(LoadError::from)?;
            let line = row.position().map_or(0, csv::Position::line);
            let raw: CsvRow = row.deserialize(Some(&headers)).map_err(LoadError::from)?;

            if raw.rate.is_empty() {
                blank += 1;
                continue;
            }
            let year = raw.year.parse::<i32>().map_err(|_| LoadError::Malformed {
                line,
                field: YEAR_COLUMN,
                value: raw.year.clone(),
            })?;
            let rate = raw.rate.parse::<f64>().map_err(|_| LoadError::Malformed {
                line,
                field: RATE_COLUMN,
                value: raw.rate.clone(),
            })?;

            let record = MortalityRecord::new(year, raw.cause, rate);
            if record.is_plausible(rate_ceiling) {
                records.push(record);
            } else {
                discarded += 1;
            }
        }

        if blank > 0 {
            warn!(rows = blank, "skipped rows without a death rate");
        }
        if discarded > 0 {
            debug!(rows = discarded, rate_ceiling, "discarded implausible rates");
        }
        if records.is_empty() {
            return Err(LoadError::Empty.into());
        }

        Ok(Self::from_parts(records, discarded))
    }

    /// Builds a source from already-typed records, applying the same filter.
    pub fn from_records(
        records: impl IntoIterator<Item = MortalityRecord>,
        rate_ceiling: f64,
    ) -> StoryResult<Self> {
        let mut discarded = 0usize;
        let kept: Vec<MortalityRecord> = records
            .into_iter()
            .filter(|record| {
                let keep = record.is_plausible(rate_ceiling);
                if !keep {
                    discarded += 1;
                }
                keep
            })
            .collect();
        if kept.is_empty() {
            return Err(LoadError::Empty.into());
        }
        Ok(Self::from_parts(kept, discarded))
    }

    fn from_parts(records: Vec<MortalityRecord>, discarded: usize) -> Self {
        let causes: IndexSet<String> = records.iter().map(|record| record.cause.clone()).collect();
        Self {
            records: records.into(),
            causes: Arc::new(causes),
            discarded,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[MortalityRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of parsed rows rejected by the rate filter.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Distinct causes in order of first appearance.
    pub fn causes(&self) -> impl Iterator<Item = &str> {
        self.causes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn cause_count(&self) -> usize {
        self.causes.len()
    }

    /// All records for `cause`, sorted by year ascending (stable for ties).
    #[must_use]
    pub fn series(&self, cause: &str) -> Vec<&MortalityRecord> {
        let mut series: Vec<&MortalityRecord> = self
            .records
            .iter()
            .filter(|record| record.cause == cause)
            .collect();
        series.sort_by_key(|record| record.year);
        series
    }

    /// All records observed in `year`, in dataset order.
    #[must_use]
    pub fn for_year(&self, year: i32) -> Vec<&MortalityRecord> {
        self.records
            .iter()
            .filter(|record| record.year == year)
            .collect()
    }

    /// The first `limit` records of `year`, highest rate first. Ties keep
    /// dataset order.
    #[must_use]
    pub fn top_for_year(&self, year: i32, limit: usize) -> Vec<&MortalityRecord> {
        let mut ranked = self.for_year(year);
        ranked.sort_by_key(|record| Reverse(OrderedFloat(record.age_adjusted_death_rate)));
        ranked.truncate(limit);
        ranked
    }

    #[must_use]
    pub fn find(&self, cause: &str, year: i32) -> Option<&MortalityRecord> {
        self.records
            .iter()
            .find(|record| record.cause == cause && record.year == year)
    }

    #[must_use]
    pub fn max_rate(&self) -> f64 {
        self.records
            .iter()
            .map(|record| OrderedFloat(record.age_adjusted_death_rate))
            .max()
            .map_or(0.0, |max| max.0)
    }

    /// `(first_year, last_year)` across the whole dataset.
    #[must_use]
    pub fn year_extent(&self) -> (i32, i32) {
        let first = self.records.iter().map(|record| record.year).min();
        let last = self.records.iter().map(|record| record.year).max();
        (first.unwrap_or_default(), last.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::DataSource;
    use crate::error::{LoadError, StoryError};

    #[test]
    fn extra_columns_and_whitespace_are_tolerated() {
        let csv = "Year,113 Cause Name, Cause ,Deaths,Age Adjusted Death Rate\n\
                   1999, x , Cancer ,10,200.5\n";
        let source = DataSource::from_reader(csv.as_bytes()).expect("load");
        assert_eq!(source.records()[0].cause, "Cancer");
        assert_eq!(source.records()[0].age_adjusted_death_rate, 200.5);
    }

    #[test]
    fn malformed_rate_reports_line() {
        let csv = "Year,Cause,Age Adjusted Death Rate\n1999,Cancer,abc\n";
        let err = DataSource::from_reader(csv.as_bytes()).expect_err("must fail");
        assert!(matches!(
            err,
            StoryError::Load(LoadError::Malformed { line: 2, .. })
        ));
    }
}
