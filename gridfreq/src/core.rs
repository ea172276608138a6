use std::sync::Arc;

use chrono::{DateTime, Utc};
use gridfreq_core::{FetchWindow, FrequencyFeed, GridfreqError};
use gridfreq_types::{BandThresholds, CacheConfig, DashboardConfig, RefreshPolicy};

use crate::cache::{SnapshotCache, SnapshotKey};
use crate::freshness::due_for_refresh;
use crate::pipeline;
use crate::session::SessionState;
use crate::snapshot::Snapshot;

/// Orchestrator that fetches, merges, and caches frequency snapshots.
///
/// Holds the two feeds (Nordic and Finnish), the pipeline configuration, and
/// the bounded window-keyed snapshot cache. All session-mutable state lives
/// in [`SessionState`], passed in by the caller.
pub struct Dashboard {
    nordic: Arc<dyn FrequencyFeed>,
    finland: Arc<dyn FrequencyFeed>,
    cfg: DashboardConfig,
    cache: SnapshotCache,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("nordic", &"<dyn FrequencyFeed>")
            .field("finland", &"<dyn FrequencyFeed>")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `Dashboard` with custom configuration.
pub struct DashboardBuilder {
    nordic: Option<Arc<dyn FrequencyFeed>>,
    finland: Option<Arc<dyn FrequencyFeed>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with default configuration: one-minute buckets,
    /// 49.95/50.05 Hz thresholds with 0.05 Hz padding, a 10 s feed timeout,
    /// a 60 s refresh gate, and a 64-window cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nordic: None,
            finland: None,
            cfg: DashboardConfig::default(),
        }
    }

    /// Register the Nordic synchronous-area feed (the sub-second one that
    /// gets resampled).
    #[must_use]
    pub fn nordic_feed(mut self, feed: Arc<dyn FrequencyFeed>) -> Self {
        self.nordic = Some(feed);
        self
    }

    /// Register the Finnish feed (the coarse one that drives alignment).
    #[must_use]
    pub fn finland_feed(mut self, feed: Arc<dyn FrequencyFeed>) -> Self {
        self.finland = Some(feed);
        self
    }

    /// Override the tolerance-band thresholds.
    #[must_use]
    pub const fn thresholds(mut self, thresholds: BandThresholds) -> Self {
        self.cfg.thresholds = thresholds;
        self
    }

    /// Override the resampling bucket width (default one minute).
    #[must_use]
    pub const fn bucket_width(mut self, bucket: std::time::Duration) -> Self {
        self.cfg.bucket_width = bucket;
        self
    }

    /// Override the per-feed fetch timeout (default 10 s).
    #[must_use]
    pub const fn feed_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.feed_timeout = timeout;
        self
    }

    /// Override the refresh gate policy (default 60 s minimum interval).
    #[must_use]
    pub const fn refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.cfg.refresh = policy;
        self
    }

    /// Override the snapshot cache sizing.
    #[must_use]
    pub const fn cache(mut self, cache: CacheConfig) -> Self {
        self.cfg.cache = cache;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub const fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Dashboard`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when either feed is missing or the bucket width
    /// is zero.
    pub fn build(self) -> Result<Dashboard, GridfreqError> {
        let nordic = self.nordic.ok_or_else(|| {
            GridfreqError::InvalidArg(
                "no Nordic feed registered; add one via nordic_feed(...)".to_string(),
            )
        })?;
        let finland = self.finland.ok_or_else(|| {
            GridfreqError::InvalidArg(
                "no Finnish feed registered; add one via finland_feed(...)".to_string(),
            )
        })?;
        if self.cfg.bucket_width.is_zero() {
            return Err(GridfreqError::InvalidArg(
                "bucket width must be positive".to_string(),
            ));
        }
        let cache = SnapshotCache::new(&self.cfg.cache);
        Ok(Dashboard {
            nordic,
            finland,
            cfg: self.cfg,
            cache,
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.cfg
    }

    /// Return the cached snapshot for `window`, or run the full
    /// fetch-and-merge pipeline and cache the result.
    ///
    /// Hits return unconditionally: entries expire only by capacity (or the
    /// optional TTL), never by comparing against fresher upstream data. A
    /// pipeline failure propagates without caching anything, so the next call
    /// retries the upstream.
    ///
    /// # Errors
    /// Propagates feed errors (`FetchTimeout`, `Feed`, `MalformedPayload`)
    /// and merge contract violations (`EmptyAlignmentInput`, `EmptySeries`).
    pub async fn get_or_fetch(&self, window: FetchWindow) -> Result<Arc<Snapshot>, GridfreqError> {
        let key = SnapshotKey::new(&window, self.cfg.bucket_width);
        if let Some(hit) = self.cache.get(&key).await {
            tracing::debug!(start = %window.start, end = %window.end, "snapshot cache hit");
            return Ok(hit);
        }

        let snapshot = Arc::new(
            pipeline::build_snapshot(&self.nordic, &self.finland, &self.cfg, window).await?,
        );
        self.cache.insert(key, Arc::clone(&snapshot)).await;
        Ok(snapshot)
    }

    /// Fetch (or re-serve from cache) the session's current window and record
    /// the result in the session.
    ///
    /// On failure the session is left untouched: `last_snapshot` keeps the
    /// previous good data for the UI to render alongside the error.
    ///
    /// # Errors
    /// Propagates the same errors as [`Dashboard::get_or_fetch`].
    pub async fn refresh(
        &self,
        session: &mut SessionState,
        window: FetchWindow,
    ) -> Result<Arc<Snapshot>, GridfreqError> {
        let snapshot = self.get_or_fetch(window).await?;
        session.record_refresh(Utc::now(), Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Whether an automatic polling tick at `now` is allowed to refresh.
    ///
    /// True only when the session's last fetch is at least the configured
    /// minimum interval in the past (or nothing was fetched yet).
    #[must_use]
    pub fn should_refresh(&self, session: &SessionState, now: DateTime<Utc>) -> bool {
        due_for_refresh(session.last_fetch_time, now, self.cfg.refresh.min_interval)
    }

    /// Refresh only if the freshness gate allows it at `now`.
    ///
    /// Returns `Ok(None)` when the gate is closed. This is the entry point an
    /// auto-refresh timer calls on every tick; `now` is also the instant
    /// recorded as the fetch time, so a caller-driven clock stays consistent
    /// with the gate.
    ///
    /// # Errors
    /// Propagates the same errors as [`Dashboard::get_or_fetch`].
    pub async fn tick(
        &self,
        session: &mut SessionState,
        now: DateTime<Utc>,
    ) -> Result<Option<Arc<Snapshot>>, GridfreqError> {
        if !self.should_refresh(session, now) {
            return Ok(None);
        }
        let window = session.current_window(now)?;
        let snapshot = self.get_or_fetch(window).await?;
        session.record_refresh(now, Arc::clone(&snapshot));
        Ok(Some(snapshot))
    }
}
