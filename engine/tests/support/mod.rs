//! Scripted data source shared by the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::{Barrier, Semaphore};

use coalcal_common::model::{DayStatus, FireRecord, WeatherRecord};
use coalcal_common::month::MonthKey;
use coalcal_engine::error::{Dataset, SourceError};
use coalcal_engine::source::DataSource;

/// Answers from canned per-month records.
///
/// A gated month blocks its fetches until the gate gets permits; a failing
/// (month, dataset) pair answers with an error.
#[derive(Default)]
pub struct ScriptedSource {
    fires: HashMap<MonthKey, Vec<FireRecord>>,
    weather: HashMap<MonthKey, Vec<WeatherRecord>>,
    failing: Mutex<HashSet<(MonthKey, Dataset)>>,
    gates: HashMap<MonthKey, Arc<Semaphore>>,
    rendezvous: Option<Arc<Barrier>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fires(mut self, month: MonthKey, records: Vec<FireRecord>) -> Self {
        self.fires.insert(month, records);
        self
    }

    pub fn with_weather(mut self, month: MonthKey, records: Vec<WeatherRecord>) -> Self {
        self.weather.insert(month, records);
        self
    }

    pub fn failing(self, month: MonthKey, dataset: Dataset) -> Self {
        self.set_failing(month, dataset, true);
        self
    }

    /// Make both fetches of one load wait for each other.
    pub fn with_rendezvous(mut self) -> Self {
        self.rendezvous = Some(Arc::new(Barrier::new(2)));
        self
    }

    /// Block fetches for `month` until permits are added to the returned gate.
    pub fn gate(&mut self, month: MonthKey) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.gates.insert(month, Arc::clone(&gate));
        gate
    }

    pub fn set_failing(&self, month: MonthKey, dataset: Dataset, failing: bool) {
        let mut set = self.failing.lock().unwrap();
        if failing {
            set.insert((month, dataset));
        } else {
            set.remove(&(month, dataset));
        }
    }

    /// Number of fetches issued so far (fire and weather counted separately).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn enter(&self, month: MonthKey, dataset: Dataset) -> Result<(), SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = self.gates.get(&month) {
            let _permit = gate.acquire().await.expect("gate closed");
        }
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
        if self.failing.lock().unwrap().contains(&(month, dataset)) {
            return Err(SourceError::Unavailable(format!("{dataset} service down")));
        }
        Ok(())
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn fetch_fire_records(&self, month: MonthKey) -> Result<Vec<FireRecord>, SourceError> {
        self.enter(month, Dataset::Fire).await?;
        Ok(self.fires.get(&month).cloned().unwrap_or_default())
    }

    async fn fetch_weather_records(
        &self,
        month: MonthKey,
    ) -> Result<Vec<WeatherRecord>, SourceError> {
        self.enter(month, Dataset::Weather).await?;
        Ok(self.weather.get(&month).cloned().unwrap_or_default())
    }
}

pub fn key(year: i32, month: u32) -> MonthKey {
    MonthKey::new(year, month).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn fire(year: i32, month: u32, day: u32, status: DayStatus) -> FireRecord {
    FireRecord::new(date(year, month, day), 1, i64::from(day), status)
}

pub fn weather(year: i32, month: u32, day: u32, temperature: f64) -> WeatherRecord {
    WeatherRecord {
        temperature: Some(temperature),
        ..WeatherRecord::empty(date(year, month, day))
    }
}
