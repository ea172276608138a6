use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use gridfreq::{Dashboard, RefreshPolicy, SessionState};
use gridfreq_mock::MockFeed;

/// Demonstrates the freshness gate: ticks inside the minimum interval are
/// served from session state without touching the upstream feeds.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let start = Utc::now() - chrono::Duration::hours(2);
    let nordic = Arc::new(MockFeed::synthetic("statnett", start, 1, 2 * 3600));
    let finland = Arc::new(MockFeed::synthetic("fingrid", start, 180, 2 * 20));

    let dashboard = Dashboard::builder()
        .nordic_feed(Arc::clone(&nordic) as Arc<dyn gridfreq::FrequencyFeed>)
        .finland_feed(Arc::clone(&finland) as Arc<dyn gridfreq::FrequencyFeed>)
        .refresh_policy(RefreshPolicy {
            min_interval: Duration::from_secs(2),
        })
        .build()?;

    let mut session = SessionState {
        auto_refresh: true,
        ..SessionState::default()
    };

    for i in 0..4 {
        let refreshed = dashboard.tick(&mut session, Utc::now()).await?;
        match refreshed {
            Some(snapshot) => println!("tick {i}: refreshed, {} rows", snapshot.points.len()),
            None => println!("tick {i}: gate closed, reusing last snapshot"),
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    println!(
        "upstream fetches: statnett={} fingrid={}",
        nordic.fetch_count(),
        finland.fetch_count()
    );

    Ok(())
}
