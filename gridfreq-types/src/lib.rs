//! gridfreq-types
//!
//! Shared error and configuration types for the gridfreq workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod feed;

pub use config::{BandThresholds, CacheConfig, DashboardConfig, RefreshPolicy};
pub use error::GridfreqError;
pub use feed::FeedKey;
