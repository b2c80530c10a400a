use std::path::Path;

use crate::data::filter::{filtered_indices, FilterOutcome};
use crate::data::model::{CriteriaError, FilterCriteria};
use crate::store::DataStore;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The loaded record set; replaced as a whole by File → Open.
    pub store: DataStore,

    /// Current year / magnitude selection.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        let criteria = FilterCriteria::initial(store.dataset());
        let mut state = Self {
            store,
            criteria,
            visible_indices: Vec::new(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Swap in a newly loaded store and reset the selection.
    pub fn set_store(&mut self, store: DataStore) {
        self.criteria = FilterCriteria::initial(store.dataset());
        self.store = store;
        self.status_message = None;
        self.refilter();
    }

    /// Load another file. On failure the current data stays in place.
    pub fn load_path(&mut self, path: &Path) {
        match DataStore::open(path) {
            Ok(store) => self.set_store(store),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(self.store.dataset(), &self.criteria);
        log::debug!(
            "Filter {}: {} of {} records",
            self.criteria,
            self.visible_indices.len(),
            self.store.dataset().len()
        );
    }

    /// Select a year present in the data.
    pub fn set_year(&mut self, year: i32) -> Result<(), CriteriaError> {
        FilterCriteria::new(year, self.criteria.magnitude).validate(self.store.dataset())?;
        if self.criteria.year != year {
            self.criteria.year = year;
            self.refilter();
        }
        Ok(())
    }

    /// Move the lower bound, clamped to the observed range; the upper bound
    /// follows when it would fall below.
    pub fn set_magnitude_low(&mut self, low: f64) {
        let bounds = self.store.dataset().magnitude_bounds;
        let low = snap_magnitude(low).clamp(bounds.low, bounds.high);
        let range = &mut self.criteria.magnitude;
        range.low = low;
        if range.high < low {
            range.high = low;
        }
        self.refilter();
    }

    /// Move the upper bound, clamped to the observed range; the lower bound
    /// follows when it would rise above.
    pub fn set_magnitude_high(&mut self, high: f64) {
        let bounds = self.store.dataset().magnitude_bounds;
        let high = snap_magnitude(high).clamp(bounds.low, bounds.high);
        let range = &mut self.criteria.magnitude;
        range.high = high;
        if range.low > high {
            range.low = high;
        }
        self.refilter();
    }

    /// The current selection, or the empty notice state.
    pub fn filter_outcome(&self) -> FilterOutcome<'_> {
        self.store.query(&self.criteria)
    }
}

/// Drops the float error a stepped slider accumulates (`5.2 + 4 * 0.1` is
/// `5.6000000000000005`), so a bound lands on the magnitude it displays.
fn snap_magnitude(value: f64) -> f64 {
    (value * 1e9).round() / 1e9
}
