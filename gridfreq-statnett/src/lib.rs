//! gridfreq-statnett
//!
//! Feed connector for the Statnett Driftsdata `Frequency/BySecond` endpoint,
//! the Nordic synchronous-area frequency source. The upstream accepts only a
//! whole-day `From` parameter, so the connector fetches the full day of the
//! window start and filters client-side.
#![warn(missing_docs)]

mod decode;

use std::time::Duration;

use async_trait::async_trait;
use gridfreq_core::{FeedKey, FetchWindow, FrequencyFeed, GridfreqError, Measurement};
use url::Url;

use decode::BySecondPayload;

pub(crate) const FEED_NAME: &str = "statnett";

const DEFAULT_BASE_URL: &str = "https://driftsdata.statnett.no/restapi/";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connector for the Nordic grid-frequency feed.
pub struct StatnettFeed {
    http: reqwest::Client,
    base_url: Url,
    request_timeout: Duration,
}

impl StatnettFeed {
    /// Static feed key for configuration and error reporting.
    pub const KEY: FeedKey = FeedKey::new(FEED_NAME);

    /// Build against the production Driftsdata endpoint with a fresh client.
    #[must_use]
    pub fn new_default() -> Self {
        Self::new_with_client(reqwest::Client::new())
    }

    /// Build from an existing `reqwest::Client` (shared pools, proxies, ...).
    #[must_use]
    pub fn new_with_client(http: reqwest::Client) -> Self {
        Self {
            http,
            // The constant is a known-valid URL.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Point the connector at a different base URL (test servers, mirrors).
    ///
    /// # Errors
    /// Returns `InvalidArg` when the URL cannot be parsed.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, GridfreqError> {
        let normalized = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        self.base_url = Url::parse(&normalized)
            .map_err(|e| GridfreqError::InvalidArg(format!("invalid base url {base}: {e}")))?;
        Ok(self)
    }

    /// Override the per-request timeout (default 10 s).
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn by_second_url(&self, window: &FetchWindow) -> Result<Url, GridfreqError> {
        let mut url = self
            .base_url
            .join("Frequency/BySecond")
            .map_err(|e| GridfreqError::InvalidArg(format!("invalid endpoint url: {e}")))?;
        // Date-granular upstream: only the start's date is honored here; the
        // sub-day window is applied after decoding.
        url.query_pairs_mut()
            .append_pair("From", &window.start.format("%Y-%m-%d").to_string());
        Ok(url)
    }

    fn map_transport_err(e: &reqwest::Error) -> GridfreqError {
        if e.is_timeout() {
            GridfreqError::timeout(FEED_NAME)
        } else if e.is_decode() {
            GridfreqError::malformed(FEED_NAME, e.to_string())
        } else if let Some(status) = e.status() {
            GridfreqError::feed(FEED_NAME, format!("upstream returned {status}"))
        } else {
            GridfreqError::feed(FEED_NAME, e.to_string())
        }
    }
}

#[async_trait]
impl FrequencyFeed for StatnettFeed {
    fn name(&self) -> &'static str {
        FEED_NAME
    }

    fn vendor(&self) -> &'static str {
        "Statnett"
    }

    async fn fetch(&self, window: &FetchWindow) -> Result<Vec<Measurement>, GridfreqError> {
        let url = self.by_second_url(window)?;
        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| Self::map_transport_err(&e))?
            .error_for_status()
            .map_err(|e| Self::map_transport_err(&e))?;

        let payload: BySecondPayload = response
            .json()
            .await
            .map_err(|e| Self::map_transport_err(&e))?;

        let mut series = decode::decode_by_second(&payload)?;
        let full_day = series.len();
        series.retain(|m| window.contains(m.ts));
        tracing::debug!(
            feed = FEED_NAME,
            full_day,
            in_window = series.len(),
            "filtered whole-day response to requested window"
        );
        Ok(series)
    }
}
