// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route tests against an in-memory store and offline weather.

use adventure_time::services::{InMemoryTipStore, TipStore};
use adventure_time::time_utils::now_epoch_ms;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::{body_json, create_test_app, create_test_app_with, north_of, trail_tip, HOUR_MS, MOAB};

/// Store with tips stamped relative to the real clock, as the routes use it.
fn seeded_store(titles: &[&str]) -> InMemoryTipStore {
    let store = InMemoryTipStore::new();
    let now = now_epoch_ms();
    for (i, title) in titles.iter().enumerate() {
        let mut tip = trail_tip(
            &format!("tip-{i}"),
            title,
            Some(north_of(MOAB, i as f64 + 1.0)),
            HOUR_MS,
        );
        tip.timestamp = now - HOUR_MS;
        store.insert(tip).unwrap();
    }
    store
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _) = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("Cache-Control").unwrap(), "no-store");
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_tip() {
    let (app, state) = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/tips",
            json!({
                "title": "Washout after the second switchback",
                "description": "Passable on the left with spotting",
                "category": "trail_condition",
                "location": {"latitude": 38.60, "longitude": -109.55},
                "author": {"name": "Casey", "vehicleType": "Land Cruiser"}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["helpful"], 0);
    assert_eq!(body["category"], "trail_condition");

    let id = body["id"].as_str().unwrap();
    assert!(state.tips.get(id).unwrap().is_some());
}

#[tokio::test]
async fn test_create_tip_rejects_invalid_submission() {
    let (app, state) = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/tips",
            json!({
                "title": "",
                "category": "safety",
                "location": {"latitude": 123.0, "longitude": 0.0},
                "author": {"name": "Casey", "vehicleType": "Land Cruiser"}
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(state.tips.all().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_tips_newest_first() {
    let store = InMemoryTipStore::new();
    store.insert(trail_tip("old", "Old", None, 5 * HOUR_MS)).unwrap();
    store.insert(trail_tip("new", "New", None, HOUR_MS)).unwrap();
    let (app, _) = create_test_app_with(store);

    let response = app.oneshot(get("/api/tips")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["id"], "new");
    assert_eq!(body[1]["id"], "old");
}

#[tokio::test]
async fn test_mark_helpful() {
    let (app, _) = create_test_app_with(seeded_store(&["Mud"]));

    let response = app
        .clone()
        .oneshot(post_json("/api/tips/tip-0/helpful", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["helpful"], 1);

    let response = app
        .oneshot(post_json("/api/tips/missing/helpful", json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nearby_tips_include_distance() {
    let (app, _) = create_test_app_with(seeded_store(&["A", "B", "C"]));

    let response = app
        .oneshot(get("/api/tips/nearby?lat=38.5729&lon=-109.5898&radius=2.5"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["tip"]["id"], "tip-0");
    assert!(items[0]["distanceMiles"].as_f64().unwrap() < items[1]["distanceMiles"].as_f64().unwrap());
}

#[tokio::test]
async fn test_tips_map_is_geojson() {
    let (app, _) = create_test_app_with(seeded_store(&["A"]));

    let response = app
        .oneshot(get("/api/tips/map?lat=38.5729&lon=-109.5898"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/geo+json"
    );
    let body = body_json(response).await;
    assert_eq!(body["type"], "FeatureCollection");
    assert_eq!(body["features"][0]["geometry"]["type"], "Point");
    assert_eq!(body["features"][0]["properties"]["id"], "tip-0");
}

#[tokio::test]
async fn test_conditions_summary() {
    let (app, _) = create_test_app_with(seeded_store(&["Deep mud", "Snow on pass", "Mud again"]));

    let response = app
        .oneshot(get("/api/conditions?lat=38.5729&lon=-109.5898&radius=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["severity"], "high");
    assert_eq!(body["primaryConcerns"], json!(["mud", "snow"]));
    assert_eq!(body["affectedAreas"], 3);
    assert_eq!(body["recentTips"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_risk_report_without_weather() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(get("/api/risk?lat=38.5729&lon=-109.5898"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["weatherStatus"], "unavailable");
    assert!(body.get("weather").is_none());
    assert_eq!(body["radiusMiles"], 10.0);
    assert_eq!(body["conditions"]["severity"], "low");
    assert_eq!(body["assessment"]["overallSeverity"], "low");
    assert_eq!(body["assessment"]["color"], "#2E7D32");
}

#[tokio::test]
async fn test_risk_report_uses_cached_weather() {
    let (app, state) = create_test_app();
    state.weather.prime(
        MOAB,
        adventure_time::models::WeatherCondition {
            condition: "Snow".to_string(),
            temperature: 20.0,
            wind_speed: 10.0,
            description: "Light snow".to_string(),
        },
        chrono::Utc::now(),
    );

    let response = app
        .oneshot(get("/api/risk?lat=38.5729&lon=-109.5898"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["weatherStatus"], "fresh");
    assert_eq!(body["weather"]["condition"], "Snow");
    assert_eq!(body["assessment"]["overallSeverity"], "high");
}

#[tokio::test]
async fn test_invalid_location_rejected() {
    let (app, _) = create_test_app();

    let response = app
        .clone()
        .oneshot(get("/api/risk?lat=91&lon=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get("/api/conditions?lat=38.5&lon=-109.5&radius=9000"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(get("/api/conditions?lon=-109.5")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_assessment() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(post_json(
            "/api/assessment",
            json!({
                "weather": {
                    "condition": "Clear",
                    "temperature": 70.0,
                    "windSpeed": 5.0,
                    "description": "clear sky"
                },
                "trailConditions": {
                    "severity": "severe",
                    "primaryConcerns": ["washout"],
                    "affectedAreas": 4
                }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["overallSeverity"], "critical");
    assert_eq!(
        body["riskFactors"],
        json!([
            "Trail reports indicate washout conditions",
            "4 areas with reported issues"
        ])
    );
    assert_eq!(body["color"], "#D32F2F");
}
