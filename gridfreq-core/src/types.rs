//! Series data model shared by connectors and the dashboard orchestrator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use gridfreq_types::{
    BandThresholds, CacheConfig, DashboardConfig, FeedKey, GridfreqError, RefreshPolicy,
};

/// One grid-frequency sample.
///
/// Frequencies are physically bounded (roughly 45–55 Hz in practice); values
/// outside that range are kept and flagged downstream, never rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Sample instant, always UTC.
    pub ts: DateTime<Utc>,
    /// Measured frequency in Hz.
    pub frequency_hz: f64,
}

impl Measurement {
    /// Construct a sample at the given instant.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, frequency_hz: f64) -> Self {
        Self { ts, frequency_hz }
    }
}

/// Time range requested from the feeds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchWindow {
    /// Window start, UTC.
    pub start: DateTime<Utc>,
    /// Window end, UTC.
    pub end: DateTime<Utc>,
}

impl FetchWindow {
    /// Build a window, rejecting inverted ranges.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, GridfreqError> {
        if start >= end {
            return Err(GridfreqError::InvalidArg(format!(
                "window start {start} is not before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// The window covering the `minutes` before `end`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `minutes` is zero.
    pub fn last_minutes(end: DateTime<Utc>, minutes: i64) -> Result<Self, GridfreqError> {
        if minutes <= 0 {
            return Err(GridfreqError::InvalidArg(format!(
                "window length must be positive, got {minutes} minutes"
            )));
        }
        Self::new(end - chrono::Duration::minutes(minutes), end)
    }

    /// True if `ts` lies within the window (inclusive on both ends).
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts <= self.end
    }

    /// Window endpoints truncated to whole minutes, for cache keying.
    #[must_use]
    pub fn minute_key(&self) -> (i64, i64) {
        (
            self.start.timestamp().div_euclid(60),
            self.end.timestamp().div_euclid(60),
        )
    }
}

/// One row of a nearest-timestamp join between two series.
///
/// `ts` and `reference_hz` come from the reference series; `other_hz` is the
/// value of the other series' row closest in time, matched without any
/// maximum-gap cutoff. `gap_ms` records how far away that match was, so
/// callers can reject stale pairings if they choose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Timestamp of the reference row, UTC.
    pub ts: DateTime<Utc>,
    /// Frequency of the reference series at `ts`.
    pub reference_hz: f64,
    /// Frequency of the nearest row in the other series.
    pub other_hz: f64,
    /// Absolute distance in milliseconds to the matched row.
    pub gap_ms: i64,
}

/// One colored "out of nominal range" rectangle on the frequency axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower edge in Hz.
    pub y0: f64,
    /// Upper edge in Hz.
    pub y1: f64,
}

impl Band {
    /// True when the band collapsed to zero height (all data in range).
    /// A degenerate band is valid and simply renders as nothing.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.y0 >= self.y1
    }
}

/// Axis bounds and violation bands derived from a merged series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower axis limit: observed minimum minus padding.
    pub axis_min: f64,
    /// Upper axis limit: observed maximum plus padding.
    pub axis_max: f64,
    /// Rectangle below the low threshold.
    pub low_band: Band,
    /// Rectangle above the high threshold.
    pub high_band: Band,
}

/// Summary statistics over one frequency column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    /// Smallest observed value in Hz.
    pub min: f64,
    /// Largest observed value in Hz.
    pub max: f64,
    /// Arithmetic mean in Hz.
    pub mean: f64,
    /// Sample standard deviation in Hz; zero for a single sample.
    pub std_dev: f64,
    /// Number of finite samples contributing.
    pub count: usize,
}
