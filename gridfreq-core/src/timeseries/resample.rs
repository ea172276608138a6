use std::time::Duration;

use chrono::DateTime;

use crate::types::Measurement;

const fn bucket_floor_ms(ts_ms: i64, step_ms: i64) -> i64 {
    ts_ms - ts_ms.rem_euclid(step_ms)
}

/// Resample an arbitrarily-sampled series into fixed-width bucket averages.
///
/// Each sample is assigned to the bucket `floor(ts / Δ) * Δ`, computed in
/// exact integer milliseconds. Every non-empty bucket yields one output
/// sample at the bucket start holding the unweighted arithmetic mean of its
/// members; buckets with no samples are omitted, never zero-filled or
/// interpolated. Output is ascending by timestamp.
///
/// Duplicate input timestamps are legal and simply contribute two samples to
/// the same bucket. A non-positive bucket width returns the input unchanged.
///
/// ```
/// use std::time::Duration;
/// use chrono::DateTime;
/// use gridfreq_core::{Measurement, resample_mean};
///
/// let m = |sec: i64, hz: f64| Measurement::new(DateTime::from_timestamp(sec, 0).unwrap(), hz);
/// let out = resample_mean(vec![m(0, 50.0), m(30, 50.2), m(60, 49.8)], Duration::from_secs(60));
/// assert_eq!(out.len(), 2);
/// assert!((out[0].frequency_hz - 50.1).abs() < 1e-12);
/// assert_eq!(out[1].frequency_hz, 49.8);
/// ```
#[must_use]
pub fn resample_mean(mut series: Vec<Measurement>, bucket: Duration) -> Vec<Measurement> {
    let step_ms = i64::try_from(bucket.as_millis()).unwrap_or(0);
    if series.is_empty() || step_ms <= 0 {
        return series;
    }

    series.sort_by_key(|m| m.ts);

    let mut out: Vec<Measurement> = Vec::new();
    let mut iter = series.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut cur_bucket = bucket_floor_ms(first.ts.timestamp_millis(), step_ms);
    let mut sum = first.frequency_hz;
    let mut count: u32 = 1;

    for m in iter {
        let bucket_ms = bucket_floor_ms(m.ts.timestamp_millis(), step_ms);
        if bucket_ms == cur_bucket {
            sum += m.frequency_hz;
            count += 1;
        } else {
            finalize_bucket(&mut out, cur_bucket, sum, count);
            cur_bucket = bucket_ms;
            sum = m.frequency_hz;
            count = 1;
        }
    }

    finalize_bucket(&mut out, cur_bucket, sum, count);

    out
}

fn finalize_bucket(out: &mut Vec<Measurement>, bucket_ms: i64, sum: f64, count: u32) {
    // Bucket starts are floors of representable instants, so this only skips
    // timestamps outside chrono's representable range.
    if let Some(ts) = DateTime::from_timestamp_millis(bucket_ms) {
        out.push(Measurement::new(ts, sum / f64::from(count)));
    }
}
