//! Writers for pipeline output.

pub mod hourly_csv;

pub use hourly_csv::write_output_csv;
