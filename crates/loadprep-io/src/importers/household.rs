//! Reader for the UCI household power consumption text file.
//!
//! **Expected format:** `;`-separated with a header row. Only `Date`
//! (day-first), `Time` and `Global_active_power` are read; every other
//! column is ignored. Missing readings are written as `?`.
//!
//! Cleaning happens in two passes, mirroring how the values are consumed:
//! first a row needs a parseable timestamp and a present power field, then
//! the power field has to coerce to a finite float. Rows failing either pass
//! are dropped without error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use loadprep_core::{CleanedRecord, PrepError, PrepResult, RawRecord};
use tracing::debug;

pub const DATE_COLUMN: &str = "Date";
pub const TIME_COLUMN: &str = "Time";
pub const ACTIVE_POWER_COLUMN: &str = "Global_active_power";

/// Literal used by the dataset for a missing reading.
pub const MISSING_MARKER: &str = "?";

/// Day-first layouts tried, in order, on the joined `"<date> <time>"` string.
const DAY_FIRST_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

/// Row counts from one import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Data rows seen, malformed ones included
    pub rows_read: usize,
    /// Rows that survived cleaning
    pub rows_kept: usize,
}

impl ImportStats {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }
}

/// Positions of the three selected columns in the header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    time: usize,
    power: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> PrepResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| PrepError::MissingColumn {
                    column: name.to_string(),
                    path: path.to_path_buf(),
                })
        };
        Ok(ColumnIndex {
            date: find(DATE_COLUMN)?,
            time: find(TIME_COLUMN)?,
            power: find(ACTIVE_POWER_COLUMN)?,
        })
    }

    fn raw_record(&self, record: &StringRecord) -> RawRecord {
        RawRecord {
            date: field(record, self.date),
            time: field(record, self.time),
            global_active_power: field(record, self.power),
        }
    }
}

/// Read and clean the raw household file at `path`.
pub fn read_household_power(path: &Path) -> PrepResult<(Vec<CleanedRecord>, ImportStats)> {
    let file = File::open(path)?;
    read_household_power_from(file, path)
}

/// Same as [`read_household_power`] over any reader; `path` is only used in
/// error messages.
pub fn read_household_power_from<R: Read>(
    reader: R,
    path: &Path,
) -> PrepResult<(Vec<CleanedRecord>, ImportStats)> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers().map_err(|err| csv_error(err, path))?.clone();
    let columns = ColumnIndex::from_headers(&headers, path)?;

    let mut stats = ImportStats::default();
    let mut cleaned = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) if err.is_io_error() => return Err(csv_error(err, path)),
            Err(err) => {
                stats.rows_read += 1;
                debug!("Dropping malformed row: {err}");
                continue;
            }
        }
        stats.rows_read += 1;
        if let Some(row) = clean_record(&columns.raw_record(&record)) {
            cleaned.push(row);
        }
    }
    stats.rows_kept = cleaned.len();
    debug!(
        "Read {} rows from {}, kept {}, dropped {}",
        stats.rows_read,
        path.display(),
        stats.rows_kept,
        stats.rows_dropped()
    );
    Ok((cleaned, stats))
}

/// Turn a raw record into a cleaned one, or `None` if the timestamp or
/// active power is missing or unusable.
pub fn clean_record(raw: &RawRecord) -> Option<CleanedRecord> {
    let timestamp = parse_timestamp(raw.date.as_deref()?, raw.time.as_deref()?)?;
    let power = raw.global_active_power.as_deref()?;
    let active_power_kw = coerce_power(power)?;
    Some(CleanedRecord {
        timestamp,
        active_power_kw,
    })
}

/// Join a day-first date and a time into a timestamp.
pub fn parse_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    DAY_FIRST_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&joined, format).ok())
}

fn coerce_power(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|power| power.is_finite())
}

fn field(record: &StringRecord, index: usize) -> Option<String> {
    let value = record.get(index)?.trim();
    if value.is_empty() || value == MISSING_MARKER {
        None
    } else {
        Some(value.to_string())
    }
}

fn csv_error(err: csv::Error, path: &Path) -> PrepError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => PrepError::Io(io_err),
            other => PrepError::Csv(format!("{}: {other:?}", path.display())),
        }
    } else {
        PrepError::Csv(format!("{}: {err}", path.display()))
    }
}
