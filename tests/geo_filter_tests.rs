// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Radius filtering tests.

use adventure_time::models::Coordinate;
use adventure_time::services::{filter_nearby, filter_nearby_with_distance, haversine_miles};

mod common;
use common::{north_of, trail_tip, MOAB};

#[test]
fn test_empty_input_returns_empty() {
    assert!(filter_nearby(&[], MOAB, 10.0).is_empty());
}

#[test]
fn test_tips_without_location_are_skipped() {
    let tips = vec![
        trail_tip("nowhere", "Unknown spot", None, 0),
        trail_tip("here", "Right here", Some(MOAB), 0),
    ];

    let nearby = filter_nearby(&tips, MOAB, 10.0);
    let ids: Vec<&str> = nearby.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["here"]);
}

#[test]
fn test_no_located_tips_returns_empty() {
    let tips = vec![
        trail_tip("a", "A", None, 0),
        trail_tip("b", "B", None, 0),
    ];
    assert!(filter_nearby(&tips, MOAB, 1000.0).is_empty());
}

#[test]
fn test_sorted_closest_first() {
    let tips = vec![
        trail_tip("far", "Far", Some(north_of(MOAB, 8.0)), 0),
        trail_tip("near", "Near", Some(north_of(MOAB, 1.0)), 0),
        trail_tip("mid", "Mid", Some(north_of(MOAB, 4.0)), 0),
    ];

    let nearby = filter_nearby(&tips, MOAB, 10.0);
    let ids: Vec<&str> = nearby.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["near", "mid", "far"]);

    // Input order is untouched.
    assert_eq!(tips[0].id, "far");
}

#[test]
fn test_radius_excludes_farther_tips() {
    let tips = vec![
        trail_tip("inside", "Inside", Some(north_of(MOAB, 9.9)), 0),
        trail_tip("outside", "Outside", Some(north_of(MOAB, 10.1)), 0),
    ];

    let nearby = filter_nearby(&tips, MOAB, 10.0);
    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].id, "inside");
}

#[test]
fn test_zero_radius_keeps_exact_matches() {
    let tips = vec![
        trail_tip("exact", "Exact", Some(MOAB), 0),
        trail_tip("close", "Close", Some(north_of(MOAB, 0.01)), 0),
    ];

    let nearby = filter_nearby(&tips, MOAB, 0.0);
    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].id, "exact");
}

#[test]
fn test_with_distance_reports_miles() {
    let tips = vec![trail_tip("five", "Five", Some(north_of(MOAB, 5.0)), 0)];

    let nearby = filter_nearby_with_distance(&tips, MOAB, 10.0);
    assert_eq!(nearby.len(), 1);
    assert!(
        (nearby[0].distance_miles - 5.0).abs() < 1e-6,
        "got {}",
        nearby[0].distance_miles
    );
}

/// Output is ordered by distance and respects the radius for a scattered
/// set of points in every direction.
#[test]
fn test_ordering_and_radius_over_scattered_points() {
    let offsets = [
        (0.01, 0.02),
        (-0.05, 0.11),
        (0.2, -0.3),
        (-0.12, -0.01),
        (0.08, 0.08),
        (0.0, 0.25),
        (-0.3, 0.0),
        (0.15, 0.02),
        (0.001, -0.001),
        (1.5, 1.5),
    ];
    let tips: Vec<_> = offsets
        .iter()
        .enumerate()
        .map(|(i, (dlat, dlon))| {
            let location = Coordinate::new(MOAB.latitude + dlat, MOAB.longitude + dlon);
            trail_tip(&format!("tip-{i}"), "Scattered", Some(location), 0)
        })
        .collect();

    let radius = 15.0;
    let nearby = filter_nearby(&tips, MOAB, radius);
    let distances: Vec<f64> = nearby
        .iter()
        .map(|t| haversine_miles(MOAB.into(), t.location.unwrap().into()))
        .collect();

    assert!(!nearby.is_empty());
    assert!(nearby.len() < tips.len(), "the far point must be excluded");
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert!(distances.iter().all(|d| *d <= radius));
}
