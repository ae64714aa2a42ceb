//! Holds the records of the most recently requested month.
//!
//! A load fetches fire and weather records concurrently and publishes a new
//! [`DayIndex`] once both have finished.  Loads overlap freely: each one is
//! stamped with a generation number when it starts, and its results are
//! applied only if no newer load has started since.  Superseded results are
//! dropped without touching the held state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use coalcal_common::month::MonthKey;

use crate::day_index::DayIndex;
use crate::error::{Dataset, FetchFailure};
use crate::fallback::FallbackPolicy;
use crate::source::DataSource;

/// What happened to the results of one [`MonthDataStore::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Results were published (possibly with per-dataset failures).
    Applied,
    /// A newer load started first; results were discarded.
    Superseded,
}

struct StoreState {
    requested: MonthKey,
    generation: u64,
    loading: bool,
    index: Arc<DayIndex>,
    errors: Vec<FetchFailure>,
}

pub struct MonthDataStore<S> {
    source: S,
    fallback: Arc<dyn FallbackPolicy>,
    state: Mutex<StoreState>,
}

impl<S: DataSource> MonthDataStore<S> {
    /// Store showing `initial` with no records until the first load.
    pub fn new(source: S, initial: MonthKey, fallback: Arc<dyn FallbackPolicy>) -> Self {
        let index = Arc::new(DayIndex::empty(initial, fallback.as_ref()));
        MonthDataStore {
            source,
            fallback,
            state: Mutex::new(StoreState {
                requested: initial,
                generation: 0,
                loading: false,
                index,
                errors: Vec::new(),
            }),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Month of the most recent load request.
    pub fn current_month(&self) -> MonthKey {
        self.lock().requested
    }

    /// Month whose records are currently held.
    pub fn loaded_month(&self) -> MonthKey {
        self.lock().index.month()
    }

    /// True while the most recent load has not finished both fetches.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// First failure of the last applied load; fire before weather.
    pub fn last_error(&self) -> Option<FetchFailure> {
        self.lock().errors.first().cloned()
    }

    /// All failures of the last applied load.
    pub fn errors(&self) -> Vec<FetchFailure> {
        self.lock().errors.clone()
    }

    /// Snapshot of the held month.  Stays valid after later loads.
    pub fn day_index(&self) -> Arc<DayIndex> {
        Arc::clone(&self.lock().index)
    }

    /// Fetch `month` and, unless superseded meanwhile, replace the held
    /// records.
    ///
    /// A dataset whose fetch fails is held empty and reported through
    /// [`last_error`](Self::last_error); the other dataset is still applied.
    /// Nothing is retried.
    pub async fn load(&self, month: MonthKey) -> LoadOutcome {
        let generation = {
            let mut state = self.lock();
            state.generation += 1;
            state.requested = month;
            state.loading = true;
            state.generation
        };
        let mut pending = PendingLoad {
            state: &self.state,
            generation,
            armed: true,
        };
        info!("Loading {month} (request #{generation})");

        let (fires, weather) = tokio::join!(
            self.source.fetch_fire_records(month),
            self.source.fetch_weather_records(month),
        );

        let mut errors = Vec::new();
        let fires = fires.unwrap_or_else(|e| {
            warn!("Fire records for {month} unavailable: {e}");
            errors.push(FetchFailure::new(Dataset::Fire, &e));
            Vec::new()
        });
        let weather = weather.unwrap_or_else(|e| {
            warn!("Weather records for {month} unavailable: {e}");
            errors.push(FetchFailure::new(Dataset::Weather, &e));
            Vec::new()
        });

        let (fire_count, weather_count) = (fires.len(), weather.len());
        let index = Arc::new(DayIndex::build(month, fires, weather, self.fallback.as_ref()));

        let mut state = self.lock();
        pending.armed = false;
        if state.generation != generation {
            debug!(
                "Discarding {month} (request #{generation}); request #{} is newer",
                state.generation
            );
            return LoadOutcome::Superseded;
        }
        state.index = index;
        state.errors = errors;
        state.loading = false;
        drop(state);

        info!("Loaded {month}: {fire_count} fire record(s), {weather_count} weather record(s)");
        LoadOutcome::Applied
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the loading flag when a load future is dropped before it finishes,
/// unless a newer load has taken over in the meantime.
struct PendingLoad<'a> {
    state: &'a Mutex<StoreState>,
    generation: u64,
    armed: bool,
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation == self.generation {
            debug!("Load request #{} cancelled", self.generation);
            state.loading = false;
        }
    }
}
