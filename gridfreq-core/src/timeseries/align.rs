use std::time::Duration;

use crate::types::{AlignedPoint, Measurement};

/// Join two independently-sampled series on nearest timestamp.
///
/// The reference series drives the output: one `AlignedPoint` per reference
/// row, carrying the reference value and the value of the `other` row whose
/// timestamp has minimum absolute distance. The join is "nearest", not
/// backward or forward, and ties resolve to the earliest candidate.
///
/// No maximum-gap cutoff is applied: a reference row with no nearby `other`
/// data is still paired with the globally nearest (possibly stale) row. The
/// match distance is exposed as `gap_ms` so callers can reject large gaps;
/// see [`discard_stale`]. Joining two disjoint time ranges therefore succeeds
/// mechanically even though the pairings carry little meaning.
///
/// If either input is empty the result is empty.
///
/// ```
/// use chrono::DateTime;
/// use gridfreq_core::{Measurement, align_nearest};
///
/// let m = |sec: i64, hz: f64| Measurement::new(DateTime::from_timestamp(sec, 0).unwrap(), hz);
/// let out = align_nearest(vec![m(0, 1.0), m(60, 2.0)], vec![m(5, 10.0), m(55, 20.0)]);
/// assert_eq!(out.len(), 2);
/// assert_eq!((out[0].reference_hz, out[0].other_hz), (1.0, 10.0));
/// assert_eq!((out[1].reference_hz, out[1].other_hz), (2.0, 20.0));
/// ```
#[must_use]
pub fn align_nearest(
    mut reference: Vec<Measurement>,
    mut other: Vec<Measurement>,
) -> Vec<AlignedPoint> {
    if reference.is_empty() || other.is_empty() {
        return Vec::new();
    }

    reference.sort_by_key(|m| m.ts);
    other.sort_by_key(|m| m.ts);

    let mut out: Vec<AlignedPoint> = Vec::with_capacity(reference.len());
    let mut j = 0usize;

    for r in &reference {
        let r_ms = r.ts.timestamp_millis();
        // Reference timestamps ascend, so the best candidate index never moves
        // backwards. Strict `<` keeps the earliest candidate on ties.
        while j + 1 < other.len() {
            let cur = (other[j].ts.timestamp_millis() - r_ms).abs();
            let next = (other[j + 1].ts.timestamp_millis() - r_ms).abs();
            if next < cur {
                j += 1;
            } else {
                break;
            }
        }
        let matched = other[j];
        out.push(AlignedPoint {
            ts: r.ts,
            reference_hz: r.frequency_hz,
            other_hz: matched.frequency_hz,
            gap_ms: (matched.ts.timestamp_millis() - r_ms).abs(),
        });
    }

    out
}

/// Drop aligned rows whose match distance exceeds `max_gap`.
///
/// The default join never rejects a pairing; this is the opt-in guard for
/// callers that consider, say, a 30-minute-old match meaningless.
#[must_use]
pub fn discard_stale(points: Vec<AlignedPoint>, max_gap: Duration) -> Vec<AlignedPoint> {
    let max_ms = i64::try_from(max_gap.as_millis()).unwrap_or(i64::MAX);
    points.into_iter().filter(|p| p.gap_ms <= max_ms).collect()
}
