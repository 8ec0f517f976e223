// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use adventure_time::config::Config;
use adventure_time::models::{CommunityTip, Coordinate, TipAuthor, TipCategory};
use adventure_time::routes::create_router;
use adventure_time::services::{InMemoryTipStore, SharedTipStore, WeatherService};
use adventure_time::AppState;
use std::sync::Arc;

/// Moab, Utah: the reference origin for these tests.
#[allow(dead_code)]
pub const MOAB: Coordinate = Coordinate {
    latitude: 38.5729,
    longitude: -109.5898,
};

/// Fixed "now" for recency checks (2025-06-15T15:06:40Z).
#[allow(dead_code)]
pub const NOW_MS: i64 = 1_750_000_000_000;

#[allow(dead_code)]
pub const HOUR_MS: i64 = 60 * 60 * 1000;

#[allow(dead_code)]
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// A trail-condition tip reported `age_ms` before [`NOW_MS`].
#[allow(dead_code)]
pub fn trail_tip(id: &str, title: &str, location: Option<Coordinate>, age_ms: i64) -> CommunityTip {
    CommunityTip {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: TipCategory::TrailCondition,
        timestamp: NOW_MS - age_ms,
        location,
        author: TipAuthor {
            name: "Tester".to_string(),
            vehicle_type: "Jeep Gladiator".to_string(),
        },
        helpful: 0,
        suggested_speed: None,
    }
}

/// A point `north_miles` due north of `origin` (1 degree ~ 69.1 mi).
#[allow(dead_code)]
pub fn north_of(origin: Coordinate, north_miles: f64) -> Coordinate {
    let degrees = north_miles / (3959.0 * std::f64::consts::PI / 180.0);
    Coordinate::new(origin.latitude + degrees, origin.longitude)
}

/// Create a test app with an in-memory store and offline weather.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(InMemoryTipStore::new())
}

#[allow(dead_code)]
pub fn create_test_app_with(store: InMemoryTipStore) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let tips: SharedTipStore = Arc::new(store);
    let weather = WeatherService::offline(chrono::Duration::minutes(config.weather_cache_ttl_minutes));

    let state = Arc::new(AppState::new(config, tips, weather));
    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
