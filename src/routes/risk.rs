// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trail condition and risk assessment routes.

use crate::error::Result;
use crate::models::{ImpactAssessment, RiskReport, TrailConditionSummary, WeatherCondition};
use crate::routes::LocationQuery;
use crate::services::calculate_impact_assessment;
use crate::time_utils::now_epoch_ms;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Risk routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/conditions", get(get_conditions))
        .route("/api/risk", get(get_risk))
        .route("/api/assessment", post(post_assessment))
}

/// Recent trail-condition summary around a point.
async fn get_conditions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<TrailConditionSummary>> {
    let (origin, radius) = params.resolve(state.config.default_radius_miles)?;
    let tips = state.tips.all()?;

    let summary = state
        .risk
        .classifier()
        .analyze(&tips, origin, radius, now_epoch_ms());
    Ok(Json(summary))
}

/// Full risk report, including current weather.
async fn get_risk(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<RiskReport>> {
    let (origin, radius) = params.resolve(state.config.default_radius_miles)?;
    let tips = state.tips.all()?;

    let now = chrono::Utc::now();
    let weather = state.weather.current(origin, now).await;

    Ok(Json(
        state.risk.build_report(&tips, origin, radius, weather, now),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentRequest {
    #[serde(default)]
    weather: Option<WeatherCondition>,
    trail_conditions: TrailConditionSummary,
}

/// Assess client-supplied weather and trail conditions.
async fn post_assessment(Json(request): Json<AssessmentRequest>) -> Json<ImpactAssessment> {
    Json(calculate_impact_assessment(
        request.weather.as_ref(),
        &request.trail_conditions,
    ))
}
