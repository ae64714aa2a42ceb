//! The data-service boundary consumed by [`MonthDataStore`](crate::store::MonthDataStore).

use async_trait::async_trait;

use coalcal_common::model::{FireRecord, WeatherRecord};
use coalcal_common::month::MonthKey;

use crate::error::SourceError;

/// Month-scoped access to fire and weather records.
///
/// Implementations must not retry on their own; a failed fetch is reported
/// and the caller decides whether to load the month again.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fire records dated within `month`.
    async fn fetch_fire_records(&self, month: MonthKey) -> Result<Vec<FireRecord>, SourceError>;

    /// Weather records dated within `month`.
    async fn fetch_weather_records(
        &self,
        month: MonthKey,
    ) -> Result<Vec<WeatherRecord>, SourceError>;
}
