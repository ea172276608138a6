use crate::types::Measurement;

/// Estimate a representative step (in milliseconds) from positive adjacent
/// timestamp deltas in the input series.
///
/// Prefer the mode (most frequent positive delta); if there is no unique
/// mode, return the lower median so the estimate is always an actually
/// observed cadence. Input order does not matter; duplicate timestamps are
/// ignored. Returns `None` with fewer than two distinct timestamps.
///
/// The dashboard uses this to notice when a feed's observed cadence drifts
/// from its nominal one (Fingrid publishes roughly every three minutes but
/// occasionally skips a slot).
#[must_use]
pub fn estimate_step_ms(mut series: Vec<Measurement>) -> Option<i64> {
    if series.len() < 2 {
        return None;
    }
    series.sort_by_key(|m| m.ts);

    let mut deltas: Vec<i64> = Vec::with_capacity(series.len().saturating_sub(1));
    let mut last = series[0].ts;
    for m in series.into_iter().skip(1) {
        let dt = m.ts.timestamp_millis() - last.timestamp_millis();
        if dt > 0 {
            deltas.push(dt);
            last = m.ts;
        }
    }
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    let mut best_delta: i64 = deltas[0];
    let mut best_count: usize = 0;
    let mut num_best_candidates: usize = 0;

    let mut cur_delta: i64 = deltas[0];
    let mut cur_count: usize = 1;
    for &d in deltas.iter().skip(1) {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        if cur_count > best_count {
            best_count = cur_count;
            best_delta = cur_delta;
            num_best_candidates = 1;
        } else if cur_count == best_count {
            num_best_candidates = num_best_candidates.saturating_add(1);
        }
        cur_delta = d;
        cur_count = 1;
    }
    if cur_count > best_count {
        best_delta = cur_delta;
        num_best_candidates = 1;
    } else if cur_count == best_count {
        num_best_candidates = num_best_candidates.saturating_add(1);
    }

    if num_best_candidates == 1 {
        return Some(best_delta);
    }

    // Lower median
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}
