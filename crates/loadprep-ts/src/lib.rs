//! Hourly resampling and synthetic feature generation.

pub mod resample;
pub mod synth;

use loadprep_core::{HourlyAggregate, OutputRecord, WeatherFeatures};

pub use resample::resample_hourly;
pub use synth::{synthesize_weather, DEFAULT_SEED};

/// Join hourly loads with their weather features into output rows.
///
/// Both slices must be row-aligned and of equal length.
pub fn assemble_output(
    hourly: &[HourlyAggregate],
    weather: &[WeatherFeatures],
) -> Vec<OutputRecord> {
    debug_assert_eq!(
        hourly.len(),
        weather.len(),
        "hourly rows and weather rows must line up"
    );
    hourly
        .iter()
        .zip(weather)
        .map(|(aggregate, features)| OutputRecord::from_parts(aggregate, features))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use loadprep_core::CleanedRecord;

    #[test]
    fn assembles_one_row_per_hour() {
        let base = NaiveDate::from_ymd_opt(2007, 1, 6)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let records: Vec<CleanedRecord> = (0..180)
            .map(|minute| CleanedRecord {
                timestamp: base + chrono::TimeDelta::minutes(minute),
                active_power_kw: 2.0,
            })
            .collect();
        let hourly = resample_hourly(&records);
        let hours: Vec<_> = hourly.iter().map(|h| h.hour).collect();
        let weather = synthesize_weather(&hours, DEFAULT_SEED).unwrap();
        let rows = assemble_output(&hourly, &weather);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.load_kw == 2.0));
        // 2007-01-06 is a Saturday
        assert!(rows.iter().all(|row| row.is_holiday == 1));
        assert_eq!(rows[1].timestamp, hours[1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must line up")]
    fn mismatched_lengths_panic_in_debug() {
        let hour = NaiveDate::from_ymd_opt(2007, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let hourly = vec![HourlyAggregate {
            hour,
            mean_active_power_kw: 1.0,
            sample_count: 1,
        }];
        assemble_output(&hourly, &[]);
    }
}
