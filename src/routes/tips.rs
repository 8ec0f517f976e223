// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community tip routes.

use crate::error::{AppError, Result};
use crate::models::{CommunityTip, NearbyTip, NewTip};
use crate::routes::LocationQuery;
use crate::services::filter_nearby_with_distance;
use crate::time_utils::now_epoch_ms;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use std::sync::Arc;
use validator::Validate;

/// Tip routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/tips", get(list_tips).post(create_tip))
        .route("/api/tips/nearby", get(nearby_tips))
        .route("/api/tips/map", get(tips_map))
        .route("/api/tips/{id}/helpful", post(mark_helpful))
}

/// All tips, newest first.
async fn list_tips(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CommunityTip>>> {
    let mut tips = state.tips.all()?;
    tips.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
    Ok(Json(tips))
}

/// Submit a new tip.
async fn create_tip(
    State(state): State<Arc<AppState>>,
    Json(new_tip): Json<NewTip>,
) -> Result<(StatusCode, Json<CommunityTip>)> {
    new_tip.validate()?;

    let tip = CommunityTip::from_submission(
        uuid::Uuid::new_v4().to_string(),
        now_epoch_ms(),
        new_tip,
    );
    state.tips.insert(tip.clone())?;

    tracing::info!(
        tip_id = %tip.id,
        category = ?tip.category,
        located = tip.location.is_some(),
        "Tip submitted"
    );

    Ok((StatusCode::CREATED, Json(tip)))
}

/// Record that someone found a tip helpful.
async fn mark_helpful(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CommunityTip>> {
    let tip = state.tips.mark_helpful(&id)?;
    tracing::debug!(tip_id = %id, helpful = tip.helpful, "Tip marked helpful");
    Ok(Json(tip))
}

/// Tips within the radius, closest first, with distances.
async fn nearby_tips(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<Vec<NearbyTip>>> {
    let (origin, radius) = params.resolve(state.config.default_radius_miles)?;
    let tips = state.tips.all()?;
    Ok(Json(filter_nearby_with_distance(&tips, origin, radius)))
}

/// Nearby tips as a GeoJSON layer for the map screen.
async fn tips_map(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationQuery>,
) -> Result<impl IntoResponse> {
    let (origin, radius) = params.resolve(state.config.default_radius_miles)?;
    let tips = state.tips.all()?;

    let collection = to_feature_collection(&filter_nearby_with_distance(&tips, origin, radius));
    let body = serde_json::to_string(&collection)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("GeoJSON encode failed: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/geo+json")], body))
}

/// One point feature per located tip.
fn to_feature_collection(nearby: &[NearbyTip]) -> FeatureCollection {
    let features = nearby
        .iter()
        .filter_map(|n| {
            let location = n.tip.location?;

            let mut properties = JsonObject::new();
            properties.insert("id".to_string(), n.tip.id.clone().into());
            properties.insert("title".to_string(), n.tip.title.clone().into());
            properties.insert(
                "category".to_string(),
                serde_json::to_value(n.tip.category).unwrap_or_default(),
            );
            properties.insert("timestamp".to_string(), n.tip.timestamp.into());
            properties.insert("helpful".to_string(), n.tip.helpful.into());
            properties.insert("distanceMiles".to_string(), n.distance_miles.into());

            Some(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    location.longitude,
                    location.latitude,
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
