use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// TsunamiFlag – the categorical tsunami column
// ---------------------------------------------------------------------------

/// Whether an event triggered a tsunami, derived from the 0/1 source flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TsunamiFlag {
    Yes,
    No,
}

impl TsunamiFlag {
    pub const ALL: [TsunamiFlag; 2] = [TsunamiFlag::Yes, TsunamiFlag::No];

    /// `1` means a tsunami was recorded; any other value (or none) does not.
    pub fn from_indicator(value: Option<f64>) -> Self {
        match value {
            Some(v) if v == 1.0 => TsunamiFlag::Yes,
            _ => TsunamiFlag::No,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TsunamiFlag::Yes => "Yes",
            TsunamiFlag::No => "No",
        }
    }
}

impl fmt::Display for TsunamiFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// EarthquakeRecord – one cleaned row of the source table
// ---------------------------------------------------------------------------

/// A single observed event. Every numeric field is present after cleaning.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeRecord {
    pub year: i32,
    pub magnitude: f64,
    /// Hypocentre depth in km.
    pub depth: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub tsunami: TsunamiFlag,
    /// Free-text location label; `None` when the column or cell is absent.
    pub place: Option<String>,
}

// ---------------------------------------------------------------------------
// MagnitudeRange / FilterCriteria – the user's current selection
// ---------------------------------------------------------------------------

/// Inclusive magnitude interval `low ..= high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeRange {
    pub low: f64,
    pub high: f64,
}

impl MagnitudeRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive at both ends.
    pub fn contains(&self, magnitude: f64) -> bool {
        self.low <= magnitude && magnitude <= self.high
    }

    /// Whether `other` lies entirely inside this range.
    pub fn covers(&self, other: &MagnitudeRange) -> bool {
        self.low <= other.low && other.high <= self.high
    }
}

impl fmt::Display for MagnitudeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} – {:.1}", self.low, self.high)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("year {0} does not occur in the data")]
    UnknownYear(i32),
    #[error("magnitude range is inverted: {low} > {high}")]
    InvertedRange { low: f64, high: f64 },
    #[error("magnitude range {requested} lies outside the observed {observed}")]
    OutOfBounds {
        requested: MagnitudeRange,
        observed: MagnitudeRange,
    },
}

/// The (year, magnitude range) pair restricting which records are shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    pub year: i32,
    pub magnitude: MagnitudeRange,
}

impl FilterCriteria {
    pub fn new(year: i32, magnitude: MagnitudeRange) -> Self {
        Self { year, magnitude }
    }

    /// Starting selection: the latest year and the full observed range.
    pub fn initial(dataset: &EarthquakeDataset) -> Self {
        Self::new(dataset.latest_year().unwrap_or_default(), dataset.magnitude_bounds)
    }

    /// Check the criteria against the years and bounds present in `dataset`.
    pub fn validate(&self, dataset: &EarthquakeDataset) -> Result<(), CriteriaError> {
        if !dataset.years.contains(&self.year) {
            return Err(CriteriaError::UnknownYear(self.year));
        }
        let MagnitudeRange { low, high } = self.magnitude;
        if low > high {
            return Err(CriteriaError::InvertedRange { low, high });
        }
        if !dataset.magnitude_bounds.covers(&self.magnitude) {
            return Err(CriteriaError::OutOfBounds {
                requested: self.magnitude,
                observed: dataset.magnitude_bounds,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, magnitude {}", self.year, self.magnitude)
    }
}

// ---------------------------------------------------------------------------
// EarthquakeDataset – the complete cleaned record set
// ---------------------------------------------------------------------------

/// The full record set with pre-computed indices.
#[derive(Debug, Clone, PartialEq)]
pub struct EarthquakeDataset {
    /// All records in source order.
    pub records: Vec<EarthquakeRecord>,
    /// Distinct years, ascending.
    pub years: BTreeSet<i32>,
    /// Observed minimum and maximum magnitude.
    pub magnitude_bounds: MagnitudeRange,
    /// Whether the source carried a `place` column.
    pub has_place: bool,
    /// Rows discarded during cleaning because a required value was missing.
    pub dropped_rows: usize,
}

impl EarthquakeDataset {
    /// Build indices from cleaned records.
    pub fn from_records(records: Vec<EarthquakeRecord>, has_place: bool, dropped_rows: usize) -> Self {
        let years = records.iter().map(|r| r.year).collect();
        let magnitude_bounds = super::aggregate::magnitude_bounds(&records)
            .unwrap_or(MagnitudeRange::new(0.0, 0.0));
        EarthquakeDataset {
            records,
            years,
            magnitude_bounds,
            has_place,
            dropped_rows,
        }
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) fn record(year: i32, magnitude: f64) -> EarthquakeRecord {
    EarthquakeRecord {
        year,
        magnitude,
        depth: 10.0,
        latitude: 0.0,
        longitude: 0.0,
        tsunami: TsunamiFlag::No,
        place: None,
    }
}
