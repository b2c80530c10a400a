use std::collections::BTreeMap;

use super::model::{EarthquakeRecord, MagnitudeRange, TsunamiFlag};

// ---------------------------------------------------------------------------
// Yearly average magnitude (trend line)
// ---------------------------------------------------------------------------

/// Mean magnitude of all events recorded in one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyMean {
    pub year: i32,
    pub mean_magnitude: f64,
    pub count: usize,
}

/// Group by year and average the magnitudes, ascending by year.
///
/// Every group has at least one member, so no mean is NaN.
pub fn yearly_average_magnitude<'a, I>(records: I) -> Vec<YearlyMean>
where
    I: IntoIterator<Item = &'a EarthquakeRecord>,
{
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for r in records {
        let entry = sums.entry(r.year).or_insert((0.0, 0));
        entry.0 += r.magnitude;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(year, (sum, count))| YearlyMean {
            year,
            mean_magnitude: sum / count as f64,
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tsunami tally (pie chart)
// ---------------------------------------------------------------------------

/// Count of records per tsunami flag. Both keys always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TsunamiTally {
    pub yes: usize,
    pub no: usize,
}

impl TsunamiTally {
    pub fn count(&self, flag: TsunamiFlag) -> usize {
        match flag {
            TsunamiFlag::Yes => self.yes,
            TsunamiFlag::No => self.no,
        }
    }

    pub fn total(&self) -> usize {
        self.yes + self.no
    }

    /// Fraction of records carrying `flag`; `0.0` for an empty tally.
    pub fn share(&self, flag: TsunamiFlag) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(flag) as f64 / total as f64,
        }
    }

    pub fn entries(&self) -> [(TsunamiFlag, usize); 2] {
        TsunamiFlag::ALL.map(|flag| (flag, self.count(flag)))
    }
}

pub fn tsunami_tally<'a, I>(records: I) -> TsunamiTally
where
    I: IntoIterator<Item = &'a EarthquakeRecord>,
{
    records
        .into_iter()
        .fold(TsunamiTally::default(), |mut tally, r| {
            match r.tsunami {
                TsunamiFlag::Yes => tally.yes += 1,
                TsunamiFlag::No => tally.no += 1,
            }
            tally
        })
}

/// Observed minimum and maximum magnitude, `None` for no records.
pub fn magnitude_bounds(records: &[EarthquakeRecord]) -> Option<MagnitudeRange> {
    let first = records.first()?.magnitude;
    let (low, high) = records
        .iter()
        .fold((first, first), |(lo, hi), r| (lo.min(r.magnitude), hi.max(r.magnitude)));
    Some(MagnitudeRange::new(low, high))
}
