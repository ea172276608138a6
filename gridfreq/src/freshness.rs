use std::time::Duration;

use chrono::{DateTime, Utc};

/// Minimum-interval gate between consecutive fetches.
///
/// Returns true only when at least `min_interval` has elapsed since
/// `last_fetch` (or when nothing has been fetched yet). Automatic polling
/// triggers can fire faster than intended; this is the single place that
/// decides whether a tick is allowed to reach the upstream APIs.
#[must_use]
pub fn due_for_refresh(
    last_fetch: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    min_interval: Duration,
) -> bool {
    let Some(last) = last_fetch else {
        return true;
    };
    let Ok(min) = chrono::Duration::from_std(min_interval) else {
        // An interval too large for chrono means "never refresh again".
        return false;
    };
    now - last >= min
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, sec).unwrap()
    }

    #[test]
    fn first_refresh_is_always_due() {
        assert!(due_for_refresh(None, t(0), Duration::from_secs(60)));
    }

    #[test]
    fn gate_blocks_inside_the_interval_and_opens_at_the_boundary() {
        let last = Some(t(0));
        assert!(!due_for_refresh(last, t(1), Duration::from_secs(60)));
        assert!(!due_for_refresh(last, t(59), Duration::from_secs(60)));
        assert!(due_for_refresh(
            last,
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 1, 0).unwrap(),
            Duration::from_secs(60)
        ));
    }

    #[test]
    fn clock_going_backwards_does_not_trigger_a_refresh() {
        let last = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap());
        assert!(!due_for_refresh(last, t(0), Duration::from_secs(60)));
    }
}
