use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gridfreq_core::{AlignedPoint, Bounds, FetchWindow, SeriesStats};

/// The complete result of one fetch-and-merge, ready for a presentation
/// layer to render: aligned rows, axis/band bounds, and per-source summary
/// statistics.
///
/// Rows are keyed off the Finnish series (the coarser cadence, roughly one
/// row per three minutes); `reference_hz` is the Fingrid value and `other_hz`
/// the nearest Nordic one-minute average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The window this snapshot covers.
    pub window: FetchWindow,
    /// Merged series, one row per Finnish sample.
    pub points: Vec<AlignedPoint>,
    /// Axis limits and out-of-nominal-range rectangles over both columns.
    pub bounds: Bounds,
    /// Summary of the Finnish column.
    pub finland: Option<SeriesStats>,
    /// Summary of the Nordic (resampled) column.
    pub nordic: Option<SeriesStats>,
    /// When the upstream fetch completed.
    pub fetched_at: DateTime<Utc>,
}
