use std::path::{Path, PathBuf};

use crate::data::aggregate::{tsunami_tally, yearly_average_magnitude, TsunamiTally, YearlyMean};
use crate::data::filter::{filter_outcome, FilterOutcome};
use crate::data::loader::{load_file, DataLoadError};
use crate::data::model::{EarthquakeDataset, FilterCriteria};

// ---------------------------------------------------------------------------
// DataStore – the single owner of the loaded record set
// ---------------------------------------------------------------------------

/// Loaded once, read-only afterwards. Holds the record set and the
/// aggregates computed over the full, unfiltered data.
#[derive(Debug, Clone)]
pub struct DataStore {
    source: Option<PathBuf>,
    dataset: EarthquakeDataset,
    yearly_means: Vec<YearlyMean>,
    tsunami_tally: TsunamiTally,
}

impl DataStore {
    /// Load `path` and compute the full-set aggregates.
    pub fn open(path: &Path) -> Result<Self, DataLoadError> {
        let dataset = load_file(path)?;
        let mut store = Self::from_dataset(dataset);
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    pub fn from_dataset(dataset: EarthquakeDataset) -> Self {
        let yearly_means = yearly_average_magnitude(&dataset.records);
        let tsunami_tally = tsunami_tally(&dataset.records);
        DataStore {
            source: None,
            dataset,
            yearly_means,
            tsunami_tally,
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn dataset(&self) -> &EarthquakeDataset {
        &self.dataset
    }

    /// Mean magnitude per year over every record, ascending by year.
    pub fn yearly_means(&self) -> &[YearlyMean] {
        &self.yearly_means
    }

    /// Tsunami Yes/No counts over every record, regardless of the filter.
    pub fn tsunami_tally(&self) -> TsunamiTally {
        self.tsunami_tally
    }

    pub fn query(&self, criteria: &FilterCriteria) -> FilterOutcome<'_> {
        filter_outcome(&self.dataset.records, criteria)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::{record, MagnitudeRange, TsunamiFlag};

    #[test]
    fn aggregates_cover_full_set() {
        let mut records = vec![record(2020, 5.0), record(2020, 7.0), record(2021, 6.0)];
        records[2].tsunami = TsunamiFlag::Yes;
        let store = DataStore::from_dataset(EarthquakeDataset::from_records(records, false, 0));

        let criteria = FilterCriteria::new(2020, MagnitudeRange::new(5.0, 7.0));
        assert_eq!(store.query(&criteria).records().len(), 2);

        // The tally ignores the current selection.
        assert_eq!(store.tsunami_tally().count(TsunamiFlag::Yes), 1);
        assert_eq!(store.tsunami_tally().total(), 3);
        assert_eq!(store.yearly_means().len(), 2);
        assert_eq!(store.source(), None);
    }

    #[test]
    fn open_remembers_source() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "magnitude,depth,Year,latitude,longitude,tsunami").unwrap();
        writeln!(file, "6.5,10,2022,1,2,1").unwrap();

        let store = DataStore::open(file.path()).unwrap();
        assert_eq!(store.source(), Some(file.path()));
        assert_eq!(store.dataset().len(), 1);
        assert_eq!(store.tsunami_tally().yes, 1);
    }
}
