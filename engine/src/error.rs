//! Error types for data loading.

use thiserror::Error;

/// Failure reported by a [`DataSource`](crate::source::DataSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("GET {url} returned {status}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Failure of a source that does not speak HTTP (files, fixtures,
    /// in-process feeds).  [`HttpDataSource`](crate::client::HttpDataSource)
    /// never returns it.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

/// The two independently fetched record sets of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Fire,
    Weather,
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dataset::Fire => f.write_str("fire"),
            Dataset::Weather => f.write_str("weather"),
        }
    }
}

/// A dataset that could not be loaded for the current month.
///
/// Kept by the store as its last error; never returned from a load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load {dataset} records: {cause}")]
pub struct FetchFailure {
    pub dataset: Dataset,
    pub cause: String,
}

impl FetchFailure {
    pub fn new(dataset: Dataset, cause: &SourceError) -> Self {
        FetchFailure {
            dataset,
            cause: cause.to_string(),
        }
    }
}
