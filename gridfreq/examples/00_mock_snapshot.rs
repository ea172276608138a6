use std::sync::Arc;

use chrono::Utc;
use gridfreq::{Dashboard, SessionState};
use gridfreq_mock::MockFeed;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,gridfreq=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    // Deterministic feeds: one hour of sub-minute Nordic data and a
    // three-minute Finnish series.
    let start = Utc::now() - chrono::Duration::hours(1);
    let dashboard = Dashboard::builder()
        .nordic_feed(Arc::new(MockFeed::synthetic("statnett", start, 1, 3600)))
        .finland_feed(Arc::new(MockFeed::synthetic("fingrid", start, 180, 20)))
        .build()?;

    let mut session = SessionState::default();
    let window = session.current_window(Utc::now())?;
    let snapshot = dashboard.refresh(&mut session, window).await?;

    println!("merged rows: {}", snapshot.points.len());
    println!(
        "axis: {:.3} – {:.3} Hz",
        snapshot.bounds.axis_min, snapshot.bounds.axis_max
    );
    if let Some(stats) = snapshot.nordic {
        println!(
            "nordic:  min {:.3}  max {:.3}  mean {:.3}  std {:.3}",
            stats.min, stats.max, stats.mean, stats.std_dev
        );
    }
    if let Some(stats) = snapshot.finland {
        println!(
            "finland: min {:.3}  max {:.3}  mean {:.3}  std {:.3}",
            stats.min, stats.max, stats.mean, stats.std_dev
        );
    }

    Ok(())
}
