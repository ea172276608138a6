//! gridfreq-fingrid
//!
//! Feed connector for the Fingrid Datahub open-data API, the Finnish grid
//! frequency source (dataset 177, roughly three-minute cadence). Requests
//! authenticate with an `x-api-key` header; the key is a fatal precondition
//! checked at construction, before any fetch.
#![warn(missing_docs)]

mod decode;

use std::time::Duration;

use async_trait::async_trait;
use gridfreq_core::{FeedKey, FetchWindow, FrequencyFeed, GridfreqError, Measurement};
use url::Url;

use decode::DataPayload;

pub(crate) const FEED_NAME: &str = "fingrid";

const DEFAULT_BASE_URL: &str = "https://data.fingrid.fi/api/";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Dataset id for the Finnish grid-frequency series on the Datahub.
pub const DATASET_FREQUENCY: u32 = 177;

/// Connector for the Finnish grid-frequency feed.
#[derive(Debug)]
pub struct FingridFeed {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    dataset_id: u32,
    request_timeout: Duration,
}

impl FingridFeed {
    /// Static feed key for configuration and error reporting.
    pub const KEY: FeedKey = FeedKey::new(FEED_NAME);

    /// Build against the production Datahub with a fresh client.
    ///
    /// # Errors
    /// Returns `MissingApiKey` when the key is empty: the Datahub rejects
    /// anonymous requests, so an absent credential can never succeed later.
    pub fn new(api_key: impl Into<String>) -> Result<Self, GridfreqError> {
        Self::new_with_client(reqwest::Client::new(), api_key)
    }

    /// Build from an existing `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `MissingApiKey` when the key is empty.
    pub fn new_with_client(
        http: reqwest::Client,
        api_key: impl Into<String>,
    ) -> Result<Self, GridfreqError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GridfreqError::MissingApiKey {
                feed: FEED_NAME.to_string(),
            });
        }
        Ok(Self {
            http,
            // The constant is a known-valid URL.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            api_key,
            dataset_id: DATASET_FREQUENCY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
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

    /// Query a different dataset (e.g. for other Datahub series).
    #[must_use]
    pub const fn with_dataset(mut self, dataset_id: u32) -> Self {
        self.dataset_id = dataset_id;
        self
    }

    /// Override the per-request timeout (default 10 s).
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn data_url(&self, window: &FetchWindow) -> Result<Url, GridfreqError> {
        let mut url = self
            .base_url
            .join(&format!("datasets/{}/data", self.dataset_id))
            .map_err(|e| GridfreqError::InvalidArg(format!("invalid endpoint url: {e}")))?;
        url.query_pairs_mut()
            .append_pair(
                "startTime",
                &window.start.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            )
            .append_pair(
                "endTime",
                &window.end.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            );
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
impl FrequencyFeed for FingridFeed {
    fn name(&self) -> &'static str {
        FEED_NAME
    }

    fn vendor(&self) -> &'static str {
        "Fingrid"
    }

    async fn fetch(&self, window: &FetchWindow) -> Result<Vec<Measurement>, GridfreqError> {
        let url = self.data_url(window)?;
        let response = self
            .http
            .get(url)
            .header("x-api-key", &self.api_key)
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(|e| Self::map_transport_err(&e))?
            .error_for_status()
            .map_err(|e| Self::map_transport_err(&e))?;

        let payload: DataPayload = response
            .json()
            .await
            .map_err(|e| Self::map_transport_err(&e))?;

        let series = decode::decode_data(payload)?;
        tracing::debug!(feed = FEED_NAME, rows = series.len(), "decoded dataset rows");
        Ok(series)
    }
}
