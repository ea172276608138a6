//! gridfreq
//!
//! Dashboard core for comparing Nordic synchronous-area and Finnish grid
//! frequency. Wires two [`gridfreq_core::FrequencyFeed`] connectors through
//! the fetch → resample → align → band pipeline, memoizes results per
//! requested window, and rate-limits refreshes.
//!
//! The crate is presentation-agnostic: it produces [`Snapshot`] values
//! (aligned rows, axis/band bounds, summary statistics) and leaves rendering,
//! labels, and timers to the caller. All session-mutable state lives in
//! [`SessionState`], owned by the caller and passed in by reference.
//!
//! ```no_run
//! use std::sync::Arc;
//! use gridfreq::{Dashboard, SessionState};
//! use gridfreq_fingrid::FingridFeed;
//! use gridfreq_statnett::StatnettFeed;
//!
//! # async fn run() -> Result<(), gridfreq::GridfreqError> {
//! let dashboard = Dashboard::builder()
//!     .nordic_feed(Arc::new(StatnettFeed::new_default()))
//!     .finland_feed(Arc::new(FingridFeed::new(std::env::var("FINGRID_API_KEY").unwrap_or_default())?))
//!     .build()?;
//!
//! let mut session = SessionState::default();
//! let window = session.current_window(chrono::Utc::now())?;
//! let snapshot = dashboard.refresh(&mut session, window).await?;
//! println!("{} merged rows", snapshot.points.len());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

mod cache;
pub(crate) mod core;
mod freshness;
mod pipeline;
mod session;
mod snapshot;

pub use core::{Dashboard, DashboardBuilder};
pub use freshness::due_for_refresh;
pub use session::SessionState;
pub use snapshot::Snapshot;

pub use gridfreq_core::{
    AlignedPoint, Band, BandThresholds, Bounds, CacheConfig, DashboardConfig, FetchWindow,
    FrequencyFeed, GridfreqError, Measurement, RefreshPolicy, SeriesStats,
};
