//! Synthetic weather columns derived from calendar position plus seeded
//! noise.
//!
//! Every column is a deterministic function of the hour list and the seed.
//! Draws are taken column by column from one generator: all temperature
//! noise first, then humidity, then wind, then precipitation. Changing that
//! order changes every value after the first column.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDateTime, Timelike};
use loadprep_core::{is_weekend, PrepError, PrepResult, WeatherFeatures};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Gamma, Normal};

/// Seed used by the pipeline.
pub const DEFAULT_SEED: u64 = 42;

const TEMPERATURE_NOISE_STD: f64 = 1.2;
const HUMIDITY_NOISE_STD: f64 = 5.0;
const WIND_NOISE_STD: f64 = 0.5;
const PRECIPITATION_SHAPE: f64 = 0.6;
const PRECIPITATION_SCALE: f64 = 0.4;

/// Draws below this are reported as dry.
pub const PRECIPITATION_THRESHOLD: f64 = 0.2;

pub const HUMIDITY_MIN: f64 = 20.0;
pub const HUMIDITY_MAX: f64 = 100.0;

/// Generate weather features for each hour, row-aligned with `hours`.
pub fn synthesize_weather(
    hours: &[NaiveDateTime],
    seed: u64,
) -> PrepResult<Vec<WeatherFeatures>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let temperature_noise = draw(&mut rng, normal(TEMPERATURE_NOISE_STD)?, hours.len());
    let humidity_noise = draw(&mut rng, normal(HUMIDITY_NOISE_STD)?, hours.len());
    let wind_noise = draw(&mut rng, normal(WIND_NOISE_STD)?, hours.len());
    let gamma = Gamma::new(PRECIPITATION_SHAPE, PRECIPITATION_SCALE)
        .map_err(|err| PrepError::Distribution(format!("precipitation gamma: {err}")))?;
    let precipitation = draw(&mut rng, gamma, hours.len());

    let features = hours
        .iter()
        .enumerate()
        .map(|(i, hour)| WeatherFeatures {
            temperature: seasonal_temperature(hour) + temperature_noise[i],
            humidity: (diurnal_humidity(hour) + humidity_noise[i])
                .clamp(HUMIDITY_MIN, HUMIDITY_MAX),
            wind_speed: (fortnightly_wind(hour) + wind_noise[i]).max(0.0),
            precipitation: dry_below_threshold(precipitation[i]),
            is_holiday: u8::from(is_weekend(hour)),
        })
        .collect();
    Ok(features)
}

/// 12 + 8·sin(2π·dayOfYear/365.25)
pub fn seasonal_temperature(hour: &NaiveDateTime) -> f64 {
    12.0 + 8.0 * (2.0 * PI * (day_of_year(hour) / 365.25)).sin()
}

/// 60 + 15·sin(2π·(hourOfDay/24 + 0.2))
pub fn diurnal_humidity(hour: &NaiveDateTime) -> f64 {
    60.0 + 15.0 * (2.0 * PI * (f64::from(hour.hour()) / 24.0 + 0.2)).sin()
}

/// |3 + 1.5·sin(2π·dayOfYear/14)|
pub fn fortnightly_wind(hour: &NaiveDateTime) -> f64 {
    (3.0 + 1.5 * (2.0 * PI * (day_of_year(hour) / 14.0)).sin()).abs()
}

fn day_of_year(hour: &NaiveDateTime) -> f64 {
    f64::from(hour.ordinal())
}

fn dry_below_threshold(value: f64) -> f64 {
    if value < PRECIPITATION_THRESHOLD {
        0.0
    } else {
        value
    }
}

fn normal(std_dev: f64) -> PrepResult<Normal<f64>> {
    Normal::new(0.0, std_dev)
        .map_err(|err| PrepError::Distribution(format!("normal(0, {std_dev}): {err}")))
}

fn draw<D: Distribution<f64>>(rng: &mut StdRng, dist: D, n: usize) -> Vec<f64> {
    dist.sample_iter(rng).take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta, Weekday};

    fn hours(n: i64) -> Vec<NaiveDateTime> {
        let start = NaiveDate::from_ymd_opt(2006, 12, 16)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        (0..n).map(|i| start + TimeDelta::hours(i)).collect()
    }

    #[test]
    fn same_seed_reproduces_values() {
        let hours = hours(500);
        let first = synthesize_weather(&hours, DEFAULT_SEED).unwrap();
        let second = synthesize_weather(&hours, DEFAULT_SEED).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seed_changes_noise() {
        let hours = hours(50);
        let a = synthesize_weather(&hours, DEFAULT_SEED).unwrap();
        let b = synthesize_weather(&hours, DEFAULT_SEED + 1).unwrap();
        assert_ne!(a, b);
        // Calendar-only column is unaffected
        let flags_a: Vec<u8> = a.iter().map(|f| f.is_holiday).collect();
        let flags_b: Vec<u8> = b.iter().map(|f| f.is_holiday).collect();
        assert_eq!(flags_a, flags_b);
    }

    #[test]
    fn columns_respect_bounds() {
        let hours = hours(24 * 400);
        let features = synthesize_weather(&hours, DEFAULT_SEED).unwrap();
        assert_eq!(features.len(), hours.len());
        for f in &features {
            assert!((HUMIDITY_MIN..=HUMIDITY_MAX).contains(&f.humidity));
            assert!(f.wind_speed >= 0.0);
            assert!(f.precipitation == 0.0 || f.precipitation >= PRECIPITATION_THRESHOLD);
            assert!(f.temperature.is_finite());
        }
        // Gamma(0.6, 0.4) falls below the threshold often enough to see dry hours
        assert!(features.iter().any(|f| f.precipitation == 0.0));
        assert!(features.iter().any(|f| f.precipitation > 0.0));
    }

    #[test]
    fn holiday_flag_tracks_weekends() {
        let hours = hours(24 * 14);
        let features = synthesize_weather(&hours, DEFAULT_SEED).unwrap();
        for (hour, f) in hours.iter().zip(&features) {
            let weekend = matches!(hour.weekday(), Weekday::Sat | Weekday::Sun);
            assert_eq!(f.is_holiday == 1, weekend);
        }
    }

    #[test]
    fn prefix_of_hours_keeps_first_column() {
        // Temperature is drawn first, so its values for a prefix of the hour
        // list match the values produced for the full list.
        let all = hours(100);
        let full = synthesize_weather(&all, DEFAULT_SEED).unwrap();
        let prefix = synthesize_weather(&all[..10], DEFAULT_SEED).unwrap();
        for (a, b) in full.iter().zip(&prefix) {
            assert_eq!(a.temperature, b.temperature);
        }
    }

    #[test]
    fn deterministic_curves() {
        let jan_first = NaiveDate::from_ymd_opt(2007, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let expected = 12.0 + 8.0 * (2.0 * PI / 365.25).sin();
        assert!((seasonal_temperature(&jan_first) - expected).abs() < 1e-12);
        let expected = 60.0 + 15.0 * (2.0 * PI * 0.2).sin();
        assert!((diurnal_humidity(&jan_first) - expected).abs() < 1e-12);
        assert!(fortnightly_wind(&jan_first) >= 1.5);
        assert_eq!(dry_below_threshold(0.19), 0.0);
        assert_eq!(dry_below_threshold(0.2), 0.2);
    }

    #[test]
    fn empty_hours_yield_empty_features() {
        assert!(synthesize_weather(&[], DEFAULT_SEED).unwrap().is_empty());
    }
}
