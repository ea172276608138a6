use std::time::Duration;

use chrono::DateTime;
use gridfreq_core::{Measurement, align_nearest, discard_stale};

fn m(sec: i64, hz: f64) -> Measurement {
    Measurement::new(DateTime::from_timestamp(sec, 0).unwrap(), hz)
}

#[test]
fn joins_each_reference_row_to_its_nearest_neighbor() {
    // t=5 is nearer to t=0 than t=55 is; t=55 is nearer to t=60.
    let out = align_nearest(
        vec![m(0, 1.0), m(60, 2.0)],
        vec![m(5, 10.0), m(55, 20.0)],
    );
    assert_eq!(out.len(), 2);

    assert_eq!(out[0].ts, DateTime::from_timestamp(0, 0).unwrap());
    assert_eq!(out[0].reference_hz, 1.0);
    assert_eq!(out[0].other_hz, 10.0);
    assert_eq!(out[0].gap_ms, 5_000);

    assert_eq!(out[1].ts, DateTime::from_timestamp(60, 0).unwrap());
    assert_eq!(out[1].reference_hz, 2.0);
    assert_eq!(out[1].other_hz, 20.0);
    assert_eq!(out[1].gap_ms, 5_000);
}

#[test]
fn ties_resolve_to_the_earliest_candidate() {
    // t=30 is equidistant from t=0 and t=60.
    let out = align_nearest(vec![m(30, 1.0)], vec![m(0, 10.0), m(60, 20.0)]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].other_hz, 10.0);
    assert_eq!(out[0].gap_ms, 30_000);
}

#[test]
fn empty_inputs_propagate_to_empty_output() {
    assert!(align_nearest(Vec::new(), vec![m(0, 1.0)]).is_empty());
    assert!(align_nearest(vec![m(0, 1.0)], Vec::new()).is_empty());
    assert!(align_nearest(Vec::new(), Vec::new()).is_empty());
}

#[test]
fn disjoint_ranges_still_join_and_expose_the_gap() {
    // Reference covers one hour, other a completely different hour: the join
    // succeeds mechanically and the gap makes the staleness visible.
    let out = align_nearest(
        vec![m(7200, 1.0), m(7260, 2.0)],
        vec![m(0, 10.0), m(180, 20.0)],
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].other_hz, 20.0);
    assert_eq!(out[0].gap_ms, (7200 - 180) * 1000);
    assert_eq!(out[1].gap_ms, (7260 - 180) * 1000);
}

#[test]
fn discard_stale_filters_by_match_distance() {
    let out = align_nearest(
        vec![m(0, 1.0), m(3600, 2.0)],
        vec![m(10, 10.0)],
    );
    assert_eq!(out.len(), 2);

    let kept = discard_stale(out, Duration::from_secs(60));
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].reference_hz, 1.0);
}

#[test]
fn unsorted_inputs_are_joined_in_time_order() {
    let out = align_nearest(
        vec![m(60, 2.0), m(0, 1.0)],
        vec![m(55, 20.0), m(5, 10.0)],
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].ts, DateTime::from_timestamp(0, 0).unwrap());
    assert_eq!(out[0].other_hz, 10.0);
    assert_eq!(out[1].other_hz, 20.0);
}

#[test]
fn single_candidate_matches_every_reference_row() {
    let out = align_nearest(
        vec![m(0, 1.0), m(60, 2.0), m(120, 3.0)],
        vec![m(90, 10.0)],
    );
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|p| p.other_hz == 10.0));
    assert_eq!(out[2].gap_ms, 30_000);
}
