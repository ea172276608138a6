//! Decoding of the Statnett `Frequency/BySecond` payload.

use chrono::DateTime;
use gridfreq_core::{GridfreqError, Measurement};
use serde::Deserialize;

use crate::FEED_NAME;

/// Raw `Frequency/BySecond` response: a dense, implicitly-timestamped array.
///
/// Timestamps exist only as `origin + index * tick`; the payload never
/// repeats them per sample.
#[derive(Debug, Deserialize)]
pub(crate) struct BySecondPayload {
    #[serde(rename = "StartPointUTC")]
    pub start_point_utc: i64,
    #[serde(rename = "PeriodTickMs")]
    pub period_tick_ms: i64,
    #[serde(rename = "Measurements")]
    pub measurements: Vec<Option<f64>>,
}

/// Reconstruct the measurement series from a dense payload.
///
/// Every timestamp is `StartPointUTC + index * PeriodTickMs`, computed in
/// exact integer milliseconds: `StartPointUTC` and `PeriodTickMs` are
/// authoritative and cadence is never inferred from the data. Getting either
/// wrong would silently shift every subsequent point, so the arithmetic stays
/// in `i64` until the final conversion to an instant.
///
/// Null samples are skipped; the index keeps advancing, so the points after a
/// null keep their true timestamps. An empty `Measurements` array decodes to
/// an empty series.
pub(crate) fn decode_by_second(
    payload: &BySecondPayload,
) -> Result<Vec<Measurement>, GridfreqError> {
    if payload.period_tick_ms <= 0 {
        return Err(GridfreqError::malformed(
            FEED_NAME,
            format!("non-positive PeriodTickMs {}", payload.period_tick_ms),
        ));
    }

    let mut out: Vec<Measurement> = Vec::with_capacity(payload.measurements.len());
    for (i, sample) in payload.measurements.iter().enumerate() {
        let Some(hz) = sample else {
            continue;
        };
        let offset = i64::try_from(i)
            .ok()
            .and_then(|i| i.checked_mul(payload.period_tick_ms));
        let ts_ms = offset.and_then(|o| payload.start_point_utc.checked_add(o));
        let ts = ts_ms.and_then(DateTime::from_timestamp_millis).ok_or_else(|| {
            GridfreqError::malformed(
                FEED_NAME,
                format!("unrepresentable timestamp at index {i}"),
            )
        })?;
        out.push(Measurement::new(ts, *hz));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(origin_ms: i64, tick_ms: i64, values: Vec<Option<f64>>) -> BySecondPayload {
        BySecondPayload {
            start_point_utc: origin_ms,
            period_tick_ms: tick_ms,
            measurements: values,
        }
    }

    #[test]
    fn timestamps_come_from_position_alone() {
        let p = payload(1_700_000_000_000, 1_000, vec![Some(50.0), Some(50.01), Some(49.99)]);
        let out = decode_by_second(&p).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].ts.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(out[1].ts.timestamp_millis(), 1_700_000_001_000);
        assert_eq!(out[2].ts.timestamp_millis(), 1_700_000_002_000);
        assert_eq!(out[1].frequency_hz, 50.01);
    }

    #[test]
    fn sub_second_ticks_do_not_accumulate_drift() {
        // 100 ms ticks across many samples stay exact because the offset is
        // integer multiplication, not repeated float addition.
        let p = payload(0, 100, (0..10_000).map(|_| Some(50.0)).collect());
        let out = decode_by_second(&p).unwrap();
        assert_eq!(out.last().unwrap().ts.timestamp_millis(), 9_999 * 100);
    }

    #[test]
    fn null_samples_are_skipped_without_shifting_later_points() {
        let p = payload(0, 1_000, vec![Some(50.0), None, Some(50.02)]);
        let out = decode_by_second(&p).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].ts.timestamp_millis(), 2_000);
        assert_eq!(out[1].frequency_hz, 50.02);
    }

    #[test]
    fn empty_measurement_array_is_an_empty_series_not_an_error() {
        let p = payload(0, 1_000, Vec::new());
        assert!(decode_by_second(&p).unwrap().is_empty());
    }

    #[test]
    fn non_positive_tick_is_malformed() {
        let p = payload(0, 0, vec![Some(50.0)]);
        assert!(matches!(
            decode_by_second(&p),
            Err(GridfreqError::MalformedPayload { .. })
        ));
    }
}
