use std::sync::Arc;

use gridfreq_core::FetchWindow;
use gridfreq_types::CacheConfig;

use crate::snapshot::Snapshot;

/// Identity of one fetch-and-merge request for caching discrimination.
///
/// Window endpoints are truncated to whole minutes (matching the cadence the
/// dashboard ever varies them at) and the bucket width participates so the
/// same window resampled at a different cadence is a distinct entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SnapshotKey {
    start_min: i64,
    end_min: i64,
    bucket_ms: u64,
}

impl SnapshotKey {
    pub(crate) fn new(window: &FetchWindow, bucket: std::time::Duration) -> Self {
        let (start_min, end_min) = window.minute_key();
        Self {
            start_min,
            end_min,
            bucket_ms: u64::try_from(bucket.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Bounded snapshot cache keyed by request identity.
///
/// Entries are shared via `Arc`, so a hit never clones the merged series.
/// Capacity (and optionally TTL) bound the session's memory; the original
/// dashboard kept every window forever, which is a leak in long sessions.
pub(crate) struct SnapshotCache {
    inner: moka::future::Cache<SnapshotKey, Arc<Snapshot>>,
}

impl SnapshotCache {
    pub(crate) fn new(cfg: &CacheConfig) -> Self {
        let mut builder = moka::future::Cache::builder().max_capacity(cfg.max_entries);
        if let Some(ttl) = cfg.ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
        }
    }

    pub(crate) async fn get(&self, key: &SnapshotKey) -> Option<Arc<Snapshot>> {
        self.inner.get(key).await
    }

    pub(crate) async fn insert(&self, key: SnapshotKey, snapshot: Arc<Snapshot>) {
        self.inner.insert(key, snapshot).await;
    }
}
