// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Radius filtering of located tips.

use crate::models::{CommunityTip, Coordinate, NearbyTip};
use geo::{Distance, HaversineMeasure, Point};

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

const EARTH_MILES: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_MILES);

/// Great-circle distance between two points in miles (haversine formula).
pub fn haversine_miles(a: Point<f64>, b: Point<f64>) -> f64 {
    EARTH_MILES.distance(a, b)
}

/// Tips within `radius_miles` of `origin`, closest first.
///
/// Tips without a location are skipped. A negative or non-finite radius
/// matches nothing.
pub fn filter_nearby(
    tips: &[CommunityTip],
    origin: Coordinate,
    radius_miles: f64,
) -> Vec<CommunityTip> {
    filter_nearby_with_distance(tips, origin, radius_miles)
        .into_iter()
        .map(|nearby| nearby.tip)
        .collect()
}

/// Like [`filter_nearby`], keeping the computed distance alongside each tip.
pub fn filter_nearby_with_distance(
    tips: &[CommunityTip],
    origin: Coordinate,
    radius_miles: f64,
) -> Vec<NearbyTip> {
    if !radius_miles.is_finite() || radius_miles < 0.0 {
        return Vec::new();
    }

    let origin: Point<f64> = origin.into();

    let mut nearby: Vec<NearbyTip> = tips
        .iter()
        .filter_map(|tip| {
            let location = tip.location?;
            let distance_miles = haversine_miles(origin, location.into());
            (distance_miles <= radius_miles).then(|| NearbyTip {
                tip: tip.clone(),
                distance_miles,
            })
        })
        .collect();

    // Stable sort keeps submission order for equidistant tips.
    nearby.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    nearby
}
