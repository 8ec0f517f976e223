// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod risk;
pub mod tips;

use crate::error::{AppError, Result};
use crate::models::Coordinate;
use crate::AppState;
use axum::http::{header, Method};
use axum::{middleware, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Largest search radius a client may ask for (miles).
pub const MAX_RADIUS_MILES: f64 = 500.0;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "mobile/src/generated/")
)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Query parameters shared by the location-scoped endpoints.
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
    /// Search radius in miles
    pub radius: Option<f64>,
}

impl LocationQuery {
    /// Validate the query, filling in the default radius.
    pub fn resolve(&self, default_radius_miles: f64) -> Result<(Coordinate, f64)> {
        if !self.lat.is_finite() || !self.lon.is_finite() {
            return Err(AppError::BadRequest("lat and lon must be numbers".to_string()));
        }
        let origin = Coordinate::new(self.lat, self.lon);
        origin.validate()?;

        let radius = self.radius.unwrap_or(default_radius_miles);
        if !radius.is_finite() || !(0.0..=MAX_RADIUS_MILES).contains(&radius) {
            return Err(AppError::BadRequest(format!(
                "radius must be between 0 and {} miles",
                MAX_RADIUS_MILES
            )));
        }

        Ok((origin, radius))
    }
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health_check))
        .merge(tips::routes())
        .merge(risk::routes())
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
