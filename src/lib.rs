// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Adventure Time: trail-condition risk assessment for off-road trips
//!
//! This crate turns community trail reports and current weather into a
//! single risk rating, with the factors behind it and what to bring.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{RiskService, SharedTipStore, WeatherService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub tips: SharedTipStore,
    pub weather: WeatherService,
    pub risk: RiskService,
}

impl AppState {
    pub fn new(config: Config, tips: SharedTipStore, weather: WeatherService) -> Self {
        let risk = RiskService::new(config.risk);
        Self {
            config,
            tips,
            weather,
            risk,
        }
    }
}
