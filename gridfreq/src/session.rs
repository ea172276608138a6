use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use gridfreq_core::{FetchWindow, GridfreqError};

use crate::snapshot::Snapshot;

/// Mutable per-session state, owned by the presentation layer.
///
/// The dashboard core stays stateless apart from its cache; everything a UI
/// session mutates (the selected window length, the auto-refresh flag, the
/// last fetch marker, the last good snapshot) lives here and is passed to
/// the core by reference. A failed refresh leaves `last_snapshot` in place so
/// the UI keeps rendering the previous data next to the error message.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Selected window length in minutes (the UI's interval picker).
    pub window_minutes: i64,
    /// Whether the session polls automatically.
    pub auto_refresh: bool,
    /// Cadence of the automatic poll.
    pub refresh_interval: Duration,
    /// When the last fetch (or cache hit) completed.
    pub last_fetch_time: Option<DateTime<Utc>>,
    /// Last successfully built snapshot.
    pub last_snapshot: Option<Arc<Snapshot>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            window_minutes: 60,
            auto_refresh: false,
            refresh_interval: Duration::from_secs(60),
            last_fetch_time: None,
            last_snapshot: None,
        }
    }
}

impl SessionState {
    /// The window ending at `now` with the session's selected length.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `window_minutes` is not positive.
    pub fn current_window(&self, now: DateTime<Utc>) -> Result<FetchWindow, GridfreqError> {
        FetchWindow::last_minutes(now, self.window_minutes)
    }

    pub(crate) fn record_refresh(&mut self, now: DateTime<Utc>, snapshot: Arc<Snapshot>) {
        self.last_fetch_time = Some(now);
        self.last_snapshot = Some(snapshot);
    }
}
