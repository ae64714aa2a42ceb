//! Types shared by the coal-pile fire calendar engine and its front ends:
//! the record model, month keys with the single date-to-day rule, and the
//! configuration file loader.

pub mod config;
pub mod model;
pub mod month;
