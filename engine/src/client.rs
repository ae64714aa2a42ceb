//! HTTP client for the fire / weather / warehouse REST service.
//!
//! Endpoints used:
//!
//! * `GET {base}/fires/month/{year}/{month}`
//! * `GET {base}/weather/month/{year}/{month}`
//! * `GET {base}/warehouses`
//!
//! Requests are issued once; there is no retry loop here.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use coalcal_common::config::Config;
use coalcal_common::model::{FireRecord, Warehouse, WeatherRecord};
use coalcal_common::month::MonthKey;

use crate::error::SourceError;
use crate::source::DataSource;

/// [`DataSource`] backed by the REST service.
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDataSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpDataSource {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        info!(
            "Using data service at {} (timeout {}s)",
            config.api_base_url, config.request_timeout_secs
        );
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All warehouses with their piles.
    pub async fn fetch_warehouses(&self) -> Result<Vec<Warehouse>, SourceError> {
        self.get_json("/warehouses").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(SourceError::Status {
                url,
                status: resp.status().as_u16(),
            });
        }

        let body = resp.text().await?;
        decode_body(&url, &body)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_fire_records(&self, month: MonthKey) -> Result<Vec<FireRecord>, SourceError> {
        self.get_json(&month_path("fires", month)).await
    }

    async fn fetch_weather_records(
        &self,
        month: MonthKey,
    ) -> Result<Vec<WeatherRecord>, SourceError> {
        self.get_json(&month_path("weather", month)).await
    }
}

// ── helpers ──────────────────────────────────────────────────────────────

/// `/{resource}/month/{year}/{month}`, month without zero padding.
fn month_path(resource: &str, month: MonthKey) -> String {
    format!("/{resource}/month/{}/{}", month.year(), month.month())
}

fn decode_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
