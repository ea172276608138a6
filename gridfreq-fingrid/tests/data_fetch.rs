use std::time::Duration;

use chrono::{TimeZone, Utc};
use gridfreq_core::{FetchWindow, FrequencyFeed, GridfreqError};
use gridfreq_fingrid::FingridFeed;
use httpmock::prelude::*;
use serde_json::json;

fn window() -> FetchWindow {
    FetchWindow::new(
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap(),
    )
    .unwrap()
}

fn feed_for(server: &MockServer) -> FingridFeed {
    FingridFeed::new("test-key")
        .unwrap()
        .with_base_url(&server.base_url())
        .unwrap()
}

#[test]
fn an_empty_api_key_is_rejected_at_construction() {
    let err = FingridFeed::new("").unwrap_err();
    assert!(matches!(err, GridfreqError::MissingApiKey { .. }));
    assert!(!err.is_transient());

    let err = FingridFeed::new("   ").unwrap_err();
    assert!(matches!(err, GridfreqError::MissingApiKey { .. }));
}

#[tokio::test]
async fn sends_the_api_key_and_iso_window_to_the_dataset_endpoint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/datasets/177/data")
            .header("x-api-key", "test-key")
            .query_param("startTime", "2024-05-01T12:00:00Z")
            .query_param("endTime", "2024-05-01T13:00:00Z");
        then.status(200).json_body(json!({
            "data": [
                { "startTime": "2024-05-01T12:03:00Z", "value": 50.02 },
                { "startTime": "2024-05-01T12:00:00Z", "value": 49.98 },
            ]
        }));
    });

    let out = feed_for(&server).fetch(&window()).await.unwrap();

    mock.assert();
    assert_eq!(out.len(), 2);
    // Ascending regardless of upstream order.
    assert_eq!(
        out[0].ts,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(out[0].frequency_hz, 49.98);
    assert_eq!(out[1].frequency_hz, 50.02);
}

#[tokio::test]
async fn offset_timestamps_are_normalized_to_utc() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/datasets/177/data");
        then.status(200).json_body(json!({
            "data": [
                { "startTime": "2024-05-01T15:00:00+03:00", "value": 50.0 },
            ]
        }));
    });

    let out = feed_for(&server).fetch(&window()).await.unwrap();
    assert_eq!(
        out[0].ts,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn empty_data_array_succeeds_with_an_empty_series() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/datasets/177/data");
        then.status(200).json_body(json!({ "data": [] }));
    });

    let out = feed_for(&server).fetch(&window()).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_a_feed_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/datasets/177/data");
        then.status(401);
    });

    let err = feed_for(&server).fetch(&window()).await.unwrap_err();
    assert!(matches!(err, GridfreqError::Feed { .. }));
}

#[tokio::test]
async fn missing_data_key_maps_to_a_malformed_payload() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/datasets/177/data");
        then.status(200).json_body(json!({ "rows": [] }));
    });

    let err = feed_for(&server).fetch(&window()).await.unwrap_err();
    assert!(matches!(err, GridfreqError::MalformedPayload { .. }));
}

#[tokio::test]
async fn slow_upstream_maps_to_a_fetch_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/datasets/177/data");
        then.status(200)
            .delay(Duration::from_millis(500))
            .json_body(json!({ "data": [] }));
    });

    let feed = feed_for(&server).with_request_timeout(Duration::from_millis(50));
    let err = feed.fetch(&window()).await.unwrap_err();
    assert!(matches!(err, GridfreqError::FetchTimeout { .. }));
}

#[tokio::test]
async fn alternate_datasets_hit_their_own_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/datasets/244/data");
        then.status(200).json_body(json!({ "data": [] }));
    });

    let feed = feed_for(&server).with_dataset(244);
    feed.fetch(&window()).await.unwrap();
    mock.assert();
}
