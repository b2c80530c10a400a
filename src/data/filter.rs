use super::model::{EarthquakeDataset, EarthquakeRecord, FilterCriteria};

/// Number of filtered rows shown in the preview table.
pub const PREVIEW_ROWS: usize = 20;

// ---------------------------------------------------------------------------
// Filter outcome: matches, or the informational empty state
// ---------------------------------------------------------------------------

/// Result of applying [`FilterCriteria`].
///
/// `Empty` is a valid outcome, not an error: the view shows a notice
/// asking the user to widen the selection.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a EarthquakeRecord>),
    Empty,
}

impl<'a> FilterOutcome<'a> {
    pub fn records(&self) -> &[&'a EarthquakeRecord] {
        match self {
            FilterOutcome::Matches(records) => records,
            FilterOutcome::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::Empty)
    }
}

/// Records of the selected year whose magnitude falls in the inclusive
/// range, in source order.
pub fn filter<'a>(records: &'a [EarthquakeRecord], criteria: &FilterCriteria) -> Vec<&'a EarthquakeRecord> {
    records
        .iter()
        .filter(|r| matches_criteria(r, criteria))
        .collect()
}

pub fn filter_outcome<'a>(records: &'a [EarthquakeRecord], criteria: &FilterCriteria) -> FilterOutcome<'a> {
    let matches = filter(records, criteria);
    if matches.is_empty() {
        FilterOutcome::Empty
    } else {
        FilterOutcome::Matches(matches)
    }
}

/// Same selection as [`filter`], as indices into `dataset.records`.
pub fn filtered_indices(dataset: &EarthquakeDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_criteria(r, criteria))
        .map(|(i, _)| i)
        .collect()
}

/// The first `n` filtered records.
pub fn preview<'a, 'b>(records: &'b [&'a EarthquakeRecord], n: usize) -> &'b [&'a EarthquakeRecord] {
    &records[..records.len().min(n)]
}

fn matches_criteria(record: &EarthquakeRecord, criteria: &FilterCriteria) -> bool {
    record.year == criteria.year && criteria.magnitude.contains(record.magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, MagnitudeRange};

    fn sample() -> Vec<EarthquakeRecord> {
        vec![record(2020, 5.0), record(2020, 7.0), record(2021, 6.0)]
    }

    #[test]
    fn selects_year_and_range() {
        let records = sample();
        let criteria = FilterCriteria::new(2021, MagnitudeRange::new(5.5, 10.0));
        let got = filter(&records, &criteria);
        assert_eq!(got, vec![&record(2021, 6.0)]);
    }

    #[test]
    fn unknown_year_is_empty_outcome() {
        let records = sample();
        let criteria = FilterCriteria::new(1999, MagnitudeRange::new(5.0, 7.0));
        let outcome = filter_outcome(&records, &criteria);
        assert_eq!(outcome, FilterOutcome::Empty);
        assert!(outcome.is_empty());
        assert!(outcome.records().is_empty());
    }

    #[test]
    fn bounds_are_inclusive() {
        let records = sample();
        let criteria = FilterCriteria::new(2020, MagnitudeRange::new(5.0, 7.0));
        assert_eq!(filter(&records, &criteria).len(), 2);
        let criteria = FilterCriteria::new(2020, MagnitudeRange::new(5.0, 5.0));
        assert_eq!(filter(&records, &criteria), vec![&record(2020, 5.0)]);
    }

    #[test]
    fn full_range_returns_whole_year_in_order() {
        let mut records = sample();
        records.insert(1, record(2021, 6.8));
        records.push(record(2020, 6.1));
        let ds = EarthquakeDataset::from_records(records.clone(), false, 0);
        let criteria = FilterCriteria::new(2020, ds.magnitude_bounds);

        let got = filter(&ds.records, &criteria);
        let expected: Vec<&EarthquakeRecord> = ds.records.iter().filter(|r| r.year == 2020).collect();
        assert_eq!(got, expected);
        assert_eq!(filtered_indices(&ds, &criteria), vec![0, 2, 4]);
    }

    #[test]
    fn every_match_satisfies_criteria() {
        let records: Vec<EarthquakeRecord> = (0..200)
            .map(|i| record(2015 + (i % 8), 5.0 + (i % 37) as f64 * 0.1))
            .collect();
        for year in 2014..=2023 {
            for (low, high) in [(5.0, 8.6), (6.0, 6.0), (6.3, 7.1), (8.0, 9.0)] {
                let criteria = FilterCriteria::new(year, MagnitudeRange::new(low, high));
                for r in filter(&records, &criteria) {
                    assert_eq!(r.year, year);
                    assert!(low <= r.magnitude && r.magnitude <= high);
                    assert!(records.iter().any(|src| std::ptr::eq(src, r)));
                }
            }
        }
    }

    #[test]
    fn preview_caps_rows() {
        let records: Vec<EarthquakeRecord> = (0..30).map(|i| record(2020, 5.0 + i as f64 * 0.01)).collect();
        let all: Vec<&EarthquakeRecord> = records.iter().collect();
        assert_eq!(preview(&all, PREVIEW_ROWS).len(), 20);
        assert_eq!(preview(&all[..5], PREVIEW_ROWS).len(), 5);
        assert!(std::ptr::eq(preview(&all, PREVIEW_ROWS)[0], &records[0]));
    }
}
