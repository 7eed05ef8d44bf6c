//! # loadprep-io: archive, import and export
//!
//! File-facing half of the pipeline:
//!
//! | Step | Module | Entry point |
//! |------|--------|-------------|
//! | Extract the zip next to itself | [`archive`] | [`archive::extract_archive`] |
//! | Locate the raw `.txt` file | [`archive`] | [`archive::find_raw_text_file`] |
//! | Parse and clean samples | [`importers::household`] | [`importers::read_household_power`] |
//! | Write the hourly table | [`exporters::hourly_csv`] | [`exporters::write_output_csv`] |
//!
//! ```rust,no_run
//! use std::path::Path;
//! use loadprep_io::{archive, importers};
//!
//! fn main() -> loadprep_core::PrepResult<()> {
//!     let dir = archive::extract_archive(Path::new("household_power_consumption.txt.zip"))?;
//!     let raw = archive::find_raw_text_file(&dir)?;
//!     let (samples, stats) = importers::read_household_power(&raw)?;
//!     println!("kept {} of {} rows", samples.len(), stats.rows_read);
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod exporters;
pub mod importers;
