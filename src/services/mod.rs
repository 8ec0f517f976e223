// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod conditions;
pub mod geo_filter;
pub mod impact;
pub mod report;
pub mod tips;
pub mod weather;

pub use conditions::{analyze_trail_conditions, ConditionClassifier, RiskThresholds};
pub use geo_filter::{filter_nearby, filter_nearby_with_distance, haversine_miles};
pub use impact::{calculate_impact_assessment, classify_weather};
pub use report::RiskService;
pub use tips::{InMemoryTipStore, SharedTipStore, StoreError, TipLoadError, TipStore};
pub use weather::{
    WeatherClient, WeatherError, WeatherLookup, WeatherService, STALE_RETENTION_WINDOWS,
};
