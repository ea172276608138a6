use std::time::Duration;

use gridfreq_types::{BandThresholds, CacheConfig, DashboardConfig, RefreshPolicy};

#[test]
fn dashboard_config_round_trips_through_json() {
    let cfg = DashboardConfig {
        thresholds: BandThresholds {
            low_hz: 49.9,
            high_hz: 50.1,
            padding_hz: 0.02,
        },
        refresh: RefreshPolicy {
            min_interval: Duration::from_secs(30),
        },
        cache: CacheConfig {
            max_entries: 8,
            ttl: Some(Duration::from_secs(300)),
        },
        bucket_width: Duration::from_secs(10),
        feed_timeout: Duration::from_secs(5),
    };

    let json = serde_json::to_string(&cfg).unwrap();
    let back: DashboardConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn defaults_match_the_documented_dashboard_behavior() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.thresholds.low_hz, 49.95);
    assert_eq!(cfg.thresholds.high_hz, 50.05);
    assert_eq!(cfg.thresholds.padding_hz, 0.05);
    assert_eq!(cfg.refresh.min_interval, Duration::from_secs(60));
    assert_eq!(cfg.bucket_width, Duration::from_secs(60));
    assert_eq!(cfg.feed_timeout, Duration::from_secs(10));
    assert_eq!(cfg.cache.max_entries, 64);
    assert!(cfg.cache.ttl.is_none());
}

#[test]
fn transient_classification_covers_the_network_boundary() {
    use gridfreq_types::GridfreqError;

    assert!(GridfreqError::timeout("statnett").is_transient());
    assert!(GridfreqError::feed("fingrid", "503").is_transient());
    assert!(GridfreqError::malformed("statnett", "missing StartPointUTC").is_transient());
    assert!(!GridfreqError::empty("banding input").is_transient());
    assert!(!GridfreqError::empty_alignment("reference").is_transient());
    assert!(
        !GridfreqError::MissingApiKey {
            feed: "fingrid".into()
        }
        .is_transient()
    );
}
