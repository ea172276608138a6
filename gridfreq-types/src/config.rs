//! Configuration types shared by the dashboard orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Nominal-range thresholds and axis padding for tolerance banding.
///
/// The Nordic synchronous area considers 49.9–50.1 Hz normal operation; the
/// dashboard highlights excursions beyond a tighter display band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Lower nominal bound in Hz; values below it fall in the low band.
    pub low_hz: f64,
    /// Upper nominal bound in Hz; values above it fall in the high band.
    pub high_hz: f64,
    /// Padding in Hz added around the observed min/max for the axis range.
    pub padding_hz: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            low_hz: 49.95,
            high_hz: 50.05,
            padding_hz: 0.05,
        }
    }
}

/// Minimum-interval gate between consecutive refreshes.
///
/// Protects the upstream APIs from refresh storms when an automatic polling
/// trigger fires faster than intended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshPolicy {
    /// Smallest allowed gap between two fetches.
    pub min_interval: Duration,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_secs(60),
        }
    }
}

/// Configuration for the window-keyed snapshot cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached snapshots before LRU-style eviction.
    pub max_entries: u64,
    /// Optional time-to-live per entry; `None` keeps entries for the whole
    /// session (bounded only by `max_entries`).
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 64,
            ttl: None,
        }
    }
}

/// Global configuration for the `Dashboard` orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Tolerance-band thresholds applied to merged snapshots.
    pub thresholds: BandThresholds,
    /// Freshness gate between refreshes.
    pub refresh: RefreshPolicy,
    /// Snapshot cache sizing.
    pub cache: CacheConfig,
    /// Bucket width used to resample the sub-second Nordic series.
    pub bucket_width: Duration,
    /// Timeout applied to each individual feed fetch.
    pub feed_timeout: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            thresholds: BandThresholds::default(),
            refresh: RefreshPolicy::default(),
            cache: CacheConfig::default(),
            bucket_width: Duration::from_secs(60),
            feed_timeout: Duration::from_secs(10),
        }
    }
}
