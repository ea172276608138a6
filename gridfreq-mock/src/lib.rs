//! gridfreq-mock
//!
//! Deterministic `FrequencyFeed` implementation for CI-safe tests and
//! examples: fixed in-memory series, scripted failures, and a call counter
//! for cache assertions.
#![warn(missing_docs)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gridfreq_core::{FetchWindow, FrequencyFeed, GridfreqError, Measurement};

/// One scripted fetch outcome.
pub type FetchOutcome = Result<Vec<Measurement>, GridfreqError>;

/// Mock feed with deterministic behavior.
///
/// By default every fetch returns the configured series clipped to the
/// requested window, the way a real feed would. A script of outcomes can be
/// queued in front: each fetch pops one until the script runs dry, then the
/// default behavior resumes.
pub struct MockFeed {
    name: &'static str,
    series: Vec<Measurement>,
    script: Mutex<VecDeque<FetchOutcome>>,
    repeat_error: Option<GridfreqError>,
    calls: AtomicUsize,
}

impl MockFeed {
    /// Feed returning `series` clipped to each requested window.
    #[must_use]
    pub fn with_series(name: &'static str, series: Vec<Measurement>) -> Self {
        Self {
            name,
            series,
            script: Mutex::new(VecDeque::new()),
            repeat_error: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Feed whose upstream never has data.
    #[must_use]
    pub fn empty(name: &'static str) -> Self {
        Self::with_series(name, Vec::new())
    }

    /// Feed that fails every fetch with a clone of `err`.
    #[must_use]
    pub fn failing(name: &'static str, err: GridfreqError) -> Self {
        let mut feed = Self::empty(name);
        feed.repeat_error = Some(err);
        feed
    }

    /// Queue explicit outcomes for the next fetches, in order; once the
    /// script runs dry, fetches return `series` clipped to the window.
    #[must_use]
    pub fn with_script(
        name: &'static str,
        series: Vec<Measurement>,
        outcomes: Vec<FetchOutcome>,
    ) -> Self {
        let feed = Self::with_series(name, series);
        *feed.script.lock().expect("script lock") = outcomes.into();
        feed
    }

    /// Regular synthetic series: one sample every `step_secs` from `start`,
    /// frequencies oscillating tightly around 50 Hz.
    #[must_use]
    pub fn synthetic(
        name: &'static str,
        start: DateTime<Utc>,
        step_secs: i64,
        count: usize,
    ) -> Self {
        let series = (0..count)
            .map(|i| {
                let offset = i as i64 * step_secs;
                let hz = 50.0 + 0.03 * f64::sin(i as f64 / 7.0);
                Measurement::new(start + chrono::Duration::seconds(offset), hz)
            })
            .collect();
        Self::with_series(name, series)
    }

    /// Number of `fetch` calls observed so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FrequencyFeed for MockFeed {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(&self, window: &FetchWindow) -> Result<Vec<Measurement>, GridfreqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let scripted = self.script.lock().expect("script lock").pop_front();
        if let Some(outcome) = scripted {
            return outcome;
        }

        if let Some(err) = &self.repeat_error {
            return Err(err.clone());
        }

        Ok(self
            .series
            .iter()
            .copied()
            .filter(|m| window.contains(m.ts))
            .collect())
    }
}
