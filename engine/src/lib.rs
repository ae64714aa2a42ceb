//! Month-scoped fire-risk aggregation for the coal-pile calendar.
//!
//! A [`store::MonthDataStore`] loads one month of fire and weather records
//! from a [`source::DataSource`], derives a [`day_index::DayIndex`] from
//! them, and [`grid::build_grid`] lays that index out as calendar cells.
//! [`calendar::FireCalendar`] bundles the pieces for front ends.

pub mod calendar;
pub mod client;
pub mod day_index;
pub mod error;
pub mod fallback;
pub mod grid;
pub mod severity;
pub mod source;
pub mod store;

pub use calendar::FireCalendar;
pub use error::{Dataset, FetchFailure, SourceError};
pub use fallback::{FallbackPolicy, RandomFallback, SeededFallback};
pub use source::DataSource;
pub use store::{LoadOutcome, MonthDataStore};
