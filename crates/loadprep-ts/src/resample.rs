use std::collections::BTreeMap;

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use loadprep_core::{CleanedRecord, HourlyAggregate};
use tracing::debug;

/// Length of one resampling bucket in seconds.
pub const HOUR_SECONDS: i64 = 3600;

/// Mean active power per clock hour.
///
/// Rows come out sorted by hour. Hours without samples are absent; nothing
/// is interpolated. Bucket sums use compensated (Kahan) summation.
pub fn resample_hourly(records: &[CleanedRecord]) -> Vec<HourlyAggregate> {
    let mut buckets: BTreeMap<NaiveDateTime, BucketStats> = BTreeMap::new();
    for record in records {
        let hour = floor_to_period(record.timestamp, HOUR_SECONDS);
        buckets.entry(hour).or_default().add(record.active_power_kw);
    }

    let hourly: Vec<HourlyAggregate> = buckets
        .into_iter()
        .map(|(hour, stats)| HourlyAggregate {
            hour,
            mean_active_power_kw: stats.mean(),
            sample_count: stats.count,
        })
        .collect();
    debug!(
        "Resampled {} samples into {} hourly buckets",
        records.len(),
        hourly.len()
    );
    hourly
}

/// Truncate `ts` to the start of its `period`-second bucket.
fn floor_to_period(ts: NaiveDateTime, period: i64) -> NaiveDateTime {
    let whole = ts.with_nanosecond(0).unwrap_or(ts);
    let secs = whole.and_utc().timestamp();
    whole - TimeDelta::seconds(secs - floor_bucket(secs, period))
}

fn floor_bucket(ts: i64, period: i64) -> i64 {
    ts - ts.rem_euclid(period)
}

#[derive(Default)]
struct BucketStats {
    count: usize,
    sum: f64,
    compensation: f64,
}

impl BucketStats {
    fn add(&mut self, value: f64) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}
