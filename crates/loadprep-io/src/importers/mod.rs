//! Readers for raw input files.

pub mod household;

pub use household::{read_household_power, ImportStats};
