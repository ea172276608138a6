use async_trait::async_trait;

use crate::types::{FetchWindow, GridfreqError, Measurement};

/// Role trait for a single grid-frequency source.
///
/// A feed retrieves measurements for one synchronous area over a requested
/// window and normalizes them into an ascending `Vec<Measurement>` with UTC
/// timestamps. Feeds are pure functions of `(window, credentials)`: no state
/// beyond the HTTP call, no caching, no resampling.
///
/// An upstream that returns no measurements for the window is not an error;
/// the feed succeeds with an empty vector and the caller decides whether
/// empty is fatal.
#[async_trait]
pub trait FrequencyFeed: Send + Sync {
    /// Stable machine name for error reporting and priority configuration.
    fn name(&self) -> &'static str;

    /// Human-readable upstream operator, e.g. "Statnett".
    fn vendor(&self) -> &'static str;

    /// Fetch measurements covering `window`, sorted ascending by timestamp.
    ///
    /// Implementations may over-fetch (the Statnett API is date-granular) but
    /// must filter the result to `window` before returning.
    ///
    /// # Errors
    /// - `FetchTimeout` when the transport times out.
    /// - `Feed` for non-2xx responses or transport failures.
    /// - `MalformedPayload` when the response cannot be decoded.
    async fn fetch(&self, window: &FetchWindow) -> Result<Vec<Measurement>, GridfreqError>;
}
