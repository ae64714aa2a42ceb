//! Day-of-month lookups over one month of records.

use std::collections::BTreeMap;

use tracing::debug;

use coalcal_common::model::{DayStatus, FireRecord, WeatherRecord};
use coalcal_common::month::MonthKey;

use crate::fallback::FallbackPolicy;
use crate::severity;

/// Number of days per status in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub safe: u32,
    pub risk: u32,
    pub fire: u32,
}

impl StatusCounts {
    pub fn get(&self, status: DayStatus) -> u32 {
        match status {
            DayStatus::Safe => self.safe,
            DayStatus::Risk => self.risk,
            DayStatus::Fire => self.fire,
        }
    }
}

/// Records of one month grouped by day, with a resolved status per day.
///
/// Built once per applied load.  Every day's status is fixed at build time,
/// so repeated queries agree even when the fallback policy is random.
#[derive(Debug, Clone)]
pub struct DayIndex {
    month: MonthKey,
    fires: BTreeMap<u32, Vec<FireRecord>>,
    weather: BTreeMap<u32, WeatherRecord>,
    /// `statuses[day - 1]`
    statuses: Vec<DayStatus>,
}

impl DayIndex {
    /// Group `fire_records` and `weather_records` by day of `month`.
    ///
    /// Records dated outside `month` are dropped.  Fire records keep their
    /// source order within a day.  For weather, the last record of a date
    /// silently replaces earlier ones (last-write-wins).
    pub fn build(
        month: MonthKey,
        fire_records: Vec<FireRecord>,
        weather_records: Vec<WeatherRecord>,
        fallback: &dyn FallbackPolicy,
    ) -> Self {
        let mut fires: BTreeMap<u32, Vec<FireRecord>> = BTreeMap::new();
        for rec in fire_records {
            match month.day_of(rec.date) {
                Some(day) => fires.entry(day).or_default().push(rec),
                None => debug!("Ignoring fire record dated {} outside {month}", rec.date),
            }
        }

        let mut weather: BTreeMap<u32, WeatherRecord> = BTreeMap::new();
        for rec in weather_records {
            match month.day_of(rec.date) {
                Some(day) => {
                    if weather.insert(day, rec).is_some() {
                        debug!("Duplicate weather record for {month} day {day}, keeping the later one");
                    }
                }
                None => debug!("Ignoring weather record dated {} outside {month}", rec.date),
            }
        }

        let statuses = month
            .days()
            .map(|day| match fires.get(&day).and_then(|recs| severity::resolve(recs)) {
                Some(status) => status,
                None => fallback.fallback(day, month),
            })
            .collect();

        DayIndex {
            month,
            fires,
            weather,
            statuses,
        }
    }

    /// Index with no records; every day takes its fallback status.
    pub fn empty(month: MonthKey, fallback: &dyn FallbackPolicy) -> Self {
        Self::build(month, Vec::new(), Vec::new(), fallback)
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    /// Resolved status of `day`, or `None` outside `1..=days_in_month`.
    pub fn status_for(&self, day: u32) -> Option<DayStatus> {
        let idx = usize::try_from(day).ok()?.checked_sub(1)?;
        self.statuses.get(idx).copied()
    }

    /// Fire records of `day` in source order; empty when there are none.
    pub fn fire_records_for(&self, day: u32) -> &[FireRecord] {
        self.fires.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn weather_for(&self, day: u32) -> Option<&WeatherRecord> {
        self.weather.get(&day)
    }

    /// Whether `day` has real fire records (its status is not a fallback).
    pub fn has_records(&self, day: u32) -> bool {
        self.fires.contains_key(&day)
    }

    /// Days with at least one fire record.
    pub fn grouped_by_day(&self) -> &BTreeMap<u32, Vec<FireRecord>> {
        &self.fires
    }

    pub fn weather_by_day(&self) -> &BTreeMap<u32, WeatherRecord> {
        &self.weather
    }

    /// `(day, status)` for every day of the month, in order.
    pub fn statuses(&self) -> impl Iterator<Item = (u32, DayStatus)> + '_ {
        self.month.days().zip(self.statuses.iter().copied())
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for status in &self.statuses {
            match status {
                DayStatus::Safe => counts.safe += 1,
                DayStatus::Risk => counts.risk += 1,
                DayStatus::Fire => counts.fire += 1,
            }
        }
        counts
    }

    /// Total fire records held.
    pub fn fire_record_count(&self) -> usize {
        self.fires.values().map(Vec::len).sum()
    }
}

// ─── tests ───────────────────────────────────────────────────────────────
