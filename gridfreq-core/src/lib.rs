//! gridfreq-core
//!
//! Core types, traits, and utilities shared across the gridfreq workspace.
//!
//! - `types`: the series data model (measurements, windows, aligned rows,
//!   bounds, stats) plus re-exported shared config and error types.
//! - `feed`: the `FrequencyFeed` trait implemented by source connectors.
//! - `timeseries`: resampling, nearest-timestamp alignment, tolerance
//!   banding, summary statistics, and cadence inference.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `FrequencyFeed` is an `async_trait` and the facade crate drives it with
//! `tokio::time::timeout`, so connectors are expected to run under a Tokio
//! 1.x runtime. The pure `timeseries` functions have no runtime dependency.
#![warn(missing_docs)]

/// The `FrequencyFeed` role trait implemented by source connectors.
pub mod feed;
/// Time-series utilities: resample, align, band, stats, infer.
pub mod timeseries;
pub mod types;

pub use feed::FrequencyFeed;
pub use timeseries::align::{align_nearest, discard_stale};
pub use timeseries::band::{bounds_for_aligned, compute_bounds};
pub use timeseries::infer::estimate_step_ms;
pub use timeseries::resample::resample_mean;
pub use timeseries::stats::summarize;
pub use types::*;
