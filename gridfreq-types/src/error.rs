use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the gridfreq workspace.
///
/// Wraps upstream feed failures (timeouts, transport errors, undecodable
/// payloads), contract violations in the pure pipeline stages (empty series
/// where data is required), and configuration problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridfreqError {
    /// A feed call exceeded the configured timeout.
    #[error("{feed} timed out")]
    FetchTimeout {
        /// Feed name that timed out.
        feed: String,
    },

    /// A feed returned a transport-level or non-2xx failure.
    #[error("{feed} failed: {msg}")]
    Feed {
        /// Feed name that failed.
        feed: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A feed responded, but the payload was missing expected keys or was
    /// not decodable as JSON.
    #[error("{feed} returned a malformed payload: {msg}")]
    MalformedPayload {
        /// Feed name whose payload could not be decoded.
        feed: String,
        /// What was missing or undecodable.
        msg: String,
    },

    /// An operation that requires data was handed an empty series.
    #[error("empty series: {what}")]
    EmptySeries {
        /// Description of the operation or input that was empty.
        what: String,
    },

    /// One side of an alignment join was empty.
    #[error("empty alignment input: {side}")]
    EmptyAlignmentInput {
        /// Which side was empty, e.g. "reference" or "other".
        side: String,
    },

    /// No API credential was configured for a feed that requires one.
    #[error("missing API key for {feed}")]
    MissingApiKey {
        /// Feed name that requires the credential.
        feed: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl GridfreqError {
    /// Helper: build a `Feed` error with the feed name and message.
    pub fn feed(feed: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Feed {
            feed: feed.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `FetchTimeout` error for the named feed.
    pub fn timeout(feed: impl Into<String>) -> Self {
        Self::FetchTimeout { feed: feed.into() }
    }

    /// Helper: build a `MalformedPayload` error.
    pub fn malformed(feed: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::MalformedPayload {
            feed: feed.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `EmptySeries` error describing the empty input.
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptySeries { what: what.into() }
    }

    /// Helper: build an `EmptyAlignmentInput` error for one join side.
    pub fn empty_alignment(side: impl Into<String>) -> Self {
        Self::EmptyAlignmentInput { side: side.into() }
    }

    /// Returns true if this error can plausibly clear on retry.
    ///
    /// Transient errors come from the network boundary (timeouts, transport
    /// failures, upstream hiccups producing bad payloads). Everything else is
    /// a contract or configuration problem that a retry will not fix.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::FetchTimeout { .. } | Self::Feed { .. } | Self::MalformedPayload { .. }
        )
    }
}
