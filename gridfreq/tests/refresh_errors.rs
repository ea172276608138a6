use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use gridfreq::{
    Dashboard, FetchWindow, FrequencyFeed, GridfreqError, Measurement, SessionState,
};
use gridfreq_mock::MockFeed;

fn ts(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
}

fn window(start_min: u32, end_min: u32) -> FetchWindow {
    FetchWindow::new(ts(12, start_min, 0), ts(12, end_min, 0)).unwrap()
}

#[tokio::test]
async fn a_failed_refresh_keeps_the_last_good_snapshot() {
    let start = ts(12, 0, 0);
    let good: Vec<Measurement> = (0..3600)
        .map(|i| Measurement::new(start + chrono::Duration::seconds(i), 50.0))
        .collect();

    // First fetch succeeds from the series, second fails, third would
    // succeed again; the dashboard never reaches it in this test.
    let nordic = Arc::new(MockFeed::with_script(
        "statnett",
        good.clone(),
        vec![
            Ok(good.clone()),
            Err(GridfreqError::feed("statnett", "upstream returned 500")),
        ],
    ));
    let finland = Arc::new(MockFeed::synthetic("fingrid", start, 180, 20));

    let dashboard = Dashboard::builder()
        .nordic_feed(Arc::clone(&nordic) as Arc<dyn FrequencyFeed>)
        .finland_feed(Arc::clone(&finland) as Arc<dyn FrequencyFeed>)
        .build()
        .unwrap();

    let mut session = SessionState::default();
    let first = dashboard
        .refresh(&mut session, window(0, 30))
        .await
        .unwrap();
    let fetch_marker = session.last_fetch_time;

    // A different window forces a cache miss, which hits the scripted error.
    let err = dashboard
        .refresh(&mut session, window(0, 45))
        .await
        .unwrap_err();
    assert!(matches!(err, GridfreqError::Feed { .. }));

    // The session still shows the previous good data, untouched.
    let kept = session.last_snapshot.as_ref().unwrap();
    assert!(Arc::ptr_eq(kept, &first));
    assert_eq!(session.last_fetch_time, fetch_marker);
}

/// Feed that never answers; only the orchestrator timeout can end the call.
struct StalledFeed;

#[async_trait]
impl FrequencyFeed for StalledFeed {
    fn name(&self) -> &'static str {
        "stalled"
    }
    fn vendor(&self) -> &'static str {
        "Test"
    }
    async fn fetch(&self, _window: &FetchWindow) -> Result<Vec<Measurement>, GridfreqError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}

#[tokio::test(start_paused = true)]
async fn a_stalled_feed_maps_to_a_fetch_timeout() {
    let finland = Arc::new(MockFeed::synthetic("fingrid", ts(12, 0, 0), 180, 20));
    let dashboard = Dashboard::builder()
        .nordic_feed(Arc::new(StalledFeed))
        .finland_feed(Arc::clone(&finland) as Arc<dyn FrequencyFeed>)
        .feed_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let err = dashboard.get_or_fetch(window(0, 30)).await.unwrap_err();
    assert_eq!(
        err,
        GridfreqError::FetchTimeout {
            feed: "stalled".into()
        }
    );
    // The Finnish feed is never consulted once the Nordic fetch times out.
    assert_eq!(finland.fetch_count(), 0);
}
