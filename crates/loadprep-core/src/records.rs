//! Record types flowing through the pipeline, from raw text fields to the
//! final hourly output row.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};

/// Layout used for every timestamp written to the output CSV.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column order of the output CSV.
pub const OUTPUT_HEADER: [&str; 7] = [
    "timestamp",
    "load_kW",
    "temperature",
    "humidity",
    "wind_speed",
    "precipitation",
    "is_holiday",
];

/// One sample as read from the raw text file. Absent fields (missing
/// marker, empty, or short row) are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub date: Option<String>,
    pub time: Option<String>,
    pub global_active_power: Option<String>,
}

/// A sample with both timestamp and active power present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanedRecord {
    pub timestamp: NaiveDateTime,
    pub active_power_kw: f64,
}

/// Mean active power for one clock hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyAggregate {
    /// Start of the hour
    pub hour: NaiveDateTime,
    pub mean_active_power_kw: f64,
    /// Number of cleaned samples that fell into the hour
    pub sample_count: usize,
}

/// Synthetic weather columns and the weekend flag for one hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherFeatures {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub is_holiday: u8,
}

/// A row of the output CSV. Field order matches [`OUTPUT_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "load_kW")]
    pub load_kw: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub is_holiday: u8,
}

impl OutputRecord {
    pub fn from_parts(aggregate: &HourlyAggregate, weather: &WeatherFeatures) -> Self {
        OutputRecord {
            timestamp: aggregate.hour,
            load_kw: aggregate.mean_active_power_kw,
            temperature: weather.temperature,
            humidity: weather.humidity,
            wind_speed: weather.wind_speed,
            precipitation: weather.precipitation,
            is_holiday: weather.is_holiday,
        }
    }
}

/// Saturday or Sunday. Stands in for a real holiday calendar.
pub fn is_weekend(timestamp: &NaiveDateTime) -> bool {
    matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun)
}

fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
