use std::sync::Arc;

use chrono::Utc;

use gridfreq_core::{
    FetchWindow, FrequencyFeed, GridfreqError, Measurement, align_nearest, bounds_for_aligned,
    estimate_step_ms, resample_mean, summarize,
};
use gridfreq_types::DashboardConfig;

use crate::snapshot::Snapshot;

/// Nominal Fingrid publication cadence, used only to flag drift in logs.
const FINLAND_NOMINAL_STEP_MS: i64 = 180_000;

/// Wrap a feed call with the configured timeout.
///
/// An elapsed timer maps onto `FetchTimeout` for the feed, indistinguishable
/// from a transport-level timeout as far as callers are concerned.
async fn fetch_with_timeout(
    feed: &Arc<dyn FrequencyFeed>,
    window: &FetchWindow,
    timeout: std::time::Duration,
) -> Result<Vec<Measurement>, GridfreqError> {
    (tokio::time::timeout(timeout, feed.fetch(window)).await)
        .unwrap_or_else(|_| Err(GridfreqError::timeout(feed.name())))
}

/// Run one full fetch-and-merge: fetch both feeds, resample the Nordic
/// sub-second series to the configured bucket, align on nearest timestamp
/// with Finland as the reference, and derive bounds and statistics.
///
/// Fetches run sequentially (Nordic first) and each is bounded by
/// `cfg.feed_timeout`. An empty series on either side after resampling
/// aborts with `EmptyAlignmentInput` before the join; an empty merge would
/// render as a blank chart with undefined bounds.
#[tracing::instrument(
    name = "gridfreq::pipeline::build_snapshot",
    skip(nordic, finland, cfg),
    fields(start = %window.start, end = %window.end),
)]
pub(crate) async fn build_snapshot(
    nordic: &Arc<dyn FrequencyFeed>,
    finland: &Arc<dyn FrequencyFeed>,
    cfg: &DashboardConfig,
    window: FetchWindow,
) -> Result<Snapshot, GridfreqError> {
    let nordic_raw = fetch_with_timeout(nordic, &window, cfg.feed_timeout).await?;
    let finland_raw = fetch_with_timeout(finland, &window, cfg.feed_timeout).await?;

    let nordic_avg = resample_mean(nordic_raw, cfg.bucket_width);

    if nordic_avg.is_empty() {
        return Err(GridfreqError::empty_alignment(nordic.name()));
    }
    if finland_raw.is_empty() {
        return Err(GridfreqError::empty_alignment(finland.name()));
    }

    if let Some(step) = estimate_step_ms(finland_raw.clone())
        && step > 2 * FINLAND_NOMINAL_STEP_MS
    {
        tracing::warn!(
            feed = finland.name(),
            observed_step_ms = step,
            "reference feed cadence drifted well past nominal"
        );
    }

    let points = align_nearest(finland_raw, nordic_avg);
    let bounds = bounds_for_aligned(&points, &cfg.thresholds)?;

    let finland_stats = summarize(points.iter().map(|p| p.reference_hz));
    let nordic_stats = summarize(points.iter().map(|p| p.other_hz));

    tracing::debug!(
        rows = points.len(),
        axis_min = bounds.axis_min,
        axis_max = bounds.axis_max,
        "merged snapshot built"
    );

    Ok(Snapshot {
        window,
        points,
        bounds,
        finland: finland_stats,
        nordic: nordic_stats,
        fetched_at: Utc::now(),
    })
}
