//! # loadprep-core: shared types
//!
//! Error type and record definitions used by every loadprep crate.
//!
//! - [`PrepError`] / [`PrepResult`] for the fatal conditions of a run
//! - [`records`] for the rows that move through extraction, cleaning,
//!   hourly aggregation and output

pub mod error;
pub mod records;

pub use error::{PrepError, PrepResult};
pub use records::{
    is_weekend, CleanedRecord, HourlyAggregate, OutputRecord, RawRecord, WeatherFeatures,
    OUTPUT_HEADER, TIMESTAMP_FORMAT,
};
