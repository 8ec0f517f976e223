// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Adventure Time API Server
//!
//! Serves community trail reports and fused weather/trail risk
//! assessments to the mobile app.

use adventure_time::{
    config::Config,
    services::{InMemoryTipStore, SharedTipStore, WeatherClient, WeatherService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Adventure Time API");

    // Seed the tip store
    let tip_store = match &config.tips_seed_path {
        Some(path) => {
            tracing::info!(path = %path, "Loading tip snapshot");
            InMemoryTipStore::load_from_file(path)?
        }
        None => InMemoryTipStore::new(),
    };
    if tip_store.is_empty() {
        tracing::warn!("Tip store is empty, condition summaries will all be low");
    } else {
        tracing::info!(count = tip_store.len(), "Tip store ready");
    }
    let tips: SharedTipStore = Arc::new(tip_store);

    // Initialize weather service
    let ttl = chrono::Duration::minutes(config.weather_cache_ttl_minutes);
    let weather = match &config.weather_api_key {
        Some(key) => {
            tracing::info!(url = %config.weather_api_url, "Weather provider configured");
            WeatherService::new(
                WeatherClient::new(config.weather_api_url.clone(), key.clone()),
                ttl,
            )
        }
        None => {
            tracing::warn!("WEATHER_API_KEY not set, risk reports will omit weather");
            WeatherService::offline(ttl)
        }
    };

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), tips, weather));

    // Build router
    let app = adventure_time::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("adventure_time=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
