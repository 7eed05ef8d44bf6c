//! Writer for the hourly output table.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use loadprep_core::{OutputRecord, PrepError, PrepResult, OUTPUT_HEADER};

/// Write `rows` to `path` as CSV, header first, without an index column.
///
/// The header is written even when `rows` is empty. Missing parent
/// directories are created.
pub fn write_output_csv(path: &Path, rows: &[OutputRecord]) -> PrepResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    write_output(file, rows)
}

/// Serialize `rows` into any writer.
pub fn write_output<W: Write>(writer: W, rows: &[OutputRecord]) -> PrepResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(OUTPUT_HEADER).map_err(csv_error)?;
    for row in rows {
        wtr.serialize(row).map_err(csv_error)?;
    }
    wtr.flush()?;
    Ok(())
}

fn csv_error(err: csv::Error) -> PrepError {
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => PrepError::Io(io_err),
        other => PrepError::Csv(format!("{other:?}")),
    }
}
