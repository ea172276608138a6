use std::sync::Arc;

use chrono::Utc;
use gridfreq::{Dashboard, SessionState};
use gridfreq_fingrid::FingridFeed;
use gridfreq_statnett::StatnettFeed;

/// Fetches the last hour of real Nordic and Finnish frequency data.
///
/// Requires a Fingrid Datahub API key in `FINGRID_API_KEY`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let api_key = std::env::var("FINGRID_API_KEY").unwrap_or_default();

    let dashboard = Dashboard::builder()
        .nordic_feed(Arc::new(StatnettFeed::new_default()))
        .finland_feed(Arc::new(FingridFeed::new(api_key)?))
        .build()?;

    let mut session = SessionState::default();
    let window = session.current_window(Utc::now())?;
    let snapshot = dashboard.refresh(&mut session, window).await?;

    println!(
        "window {} – {} ({} merged rows)",
        snapshot.window.start, snapshot.window.end,
        snapshot.points.len()
    );
    for p in snapshot.points.iter().rev().take(5).rev() {
        println!(
            "{}  finland {:.3} Hz  nordic {:.3} Hz  (gap {} ms)",
            p.ts.format("%H:%M"),
            p.reference_hz,
            p.other_hz,
            p.gap_ms
        );
    }

    Ok(())
}
