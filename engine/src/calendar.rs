//! Front-end facing calendar: month navigation, load state and day lookups.

use std::sync::Arc;

use coalcal_common::model::{DayStatus, FireRecord, WeatherRecord};
use coalcal_common::month::{MonthKey, MonthKeyError, WeekStart};

use crate::day_index::DayIndex;
use crate::error::FetchFailure;
use crate::fallback::FallbackPolicy;
use crate::grid::{self, GridCell};
use crate::source::DataSource;
use crate::store::{LoadOutcome, MonthDataStore};

/// Everything a calendar view needs, backed by one [`MonthDataStore`].
///
/// Day queries answer from the month that was loaded last, which lags
/// [`current_month`](Self::current_month) while a load is in flight.
pub struct FireCalendar<S> {
    store: MonthDataStore<S>,
}

impl<S: DataSource> FireCalendar<S> {
    pub fn new(source: S, initial: MonthKey, fallback: Arc<dyn FallbackPolicy>) -> Self {
        FireCalendar {
            store: MonthDataStore::new(source, initial, fallback),
        }
    }

    pub fn store(&self) -> &MonthDataStore<S> {
        &self.store
    }

    pub fn current_month(&self) -> MonthKey {
        self.store.current_month()
    }

    /// Switch to `year`-`month` and load it.  Calling again with the same
    /// month reloads it.
    pub async fn set_month(&self, year: i32, month: u32) -> Result<LoadOutcome, MonthKeyError> {
        let key = MonthKey::new(year, month)?;
        Ok(self.show(key).await)
    }

    /// Switch to `month` and load it.
    pub async fn show(&self, month: MonthKey) -> LoadOutcome {
        self.store.load(month).await
    }

    /// Load the month after the current one.
    pub async fn next_month(&self) -> Option<LoadOutcome> {
        let key = self.current_month().next()?;
        Some(self.show(key).await)
    }

    /// Load the month before the current one.
    pub async fn prev_month(&self) -> Option<LoadOutcome> {
        let key = self.current_month().prev()?;
        Some(self.show(key).await)
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn last_error(&self) -> Option<FetchFailure> {
        self.store.last_error()
    }

    pub fn day_index(&self) -> Arc<DayIndex> {
        self.store.day_index()
    }

    pub fn status_for(&self, day: u32) -> Option<DayStatus> {
        self.store.day_index().status_for(day)
    }

    pub fn fire_records_for(&self, day: u32) -> Vec<FireRecord> {
        self.store.day_index().fire_records_for(day).to_vec()
    }

    pub fn weather_for(&self, day: u32) -> Option<WeatherRecord> {
        self.store.day_index().weather_for(day).cloned()
    }

    pub fn build_grid(&self, week_start: WeekStart) -> Vec<GridCell> {
        grid::build_grid(&self.store.day_index(), week_start)
    }
}
