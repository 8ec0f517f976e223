// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::RiskThresholds;
use std::env;
use std::str::FromStr;

const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Mobile/web frontend origin allowed by CORS
    pub frontend_url: String,
    /// Search radius used when a request does not give one (miles)
    pub default_radius_miles: f64,
    /// Weather provider base URL
    pub weather_api_url: String,
    /// Weather provider API key; weather runs offline without one
    pub weather_api_key: Option<String>,
    /// How long a weather reading counts as fresh
    pub weather_cache_ttl_minutes: i64,
    /// Optional JSON snapshot to seed the tip store from
    pub tips_seed_path: Option<String>,
    /// Recency window and severity cutoffs for trail reports
    pub risk: RiskThresholds,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:8081".to_string(),
            default_radius_miles: 10.0,
            weather_api_url: DEFAULT_WEATHER_API_URL.to_string(),
            weather_api_key: None,
            weather_cache_ttl_minutes: 30,
            tips_seed_path: None,
            risk: RiskThresholds::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = RiskThresholds::default();
        let risk = RiskThresholds {
            recent_window_days: parse_var("RISK_RECENT_WINDOW_DAYS", defaults.recent_window_days)?,
            moderate_min: parse_var("RISK_MODERATE_MIN", defaults.moderate_min)?,
            high_min: parse_var("RISK_HIGH_MIN", defaults.high_min)?,
            severe_min: parse_var("RISK_SEVERE_MIN", defaults.severe_min)?,
        };
        if !risk.is_consistent() {
            return Err(ConfigError::Invalid {
                name: "RISK_*_MIN",
                reason: "severity cutoffs must be positive and strictly increasing".to_string(),
            });
        }

        let default_radius_miles: f64 = parse_var("DEFAULT_RADIUS_MILES", 10.0)?;
        if !(default_radius_miles.is_finite() && default_radius_miles >= 0.0) {
            return Err(ConfigError::Invalid {
                name: "DEFAULT_RADIUS_MILES",
                reason: "must be a non-negative number".to_string(),
            });
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            default_radius_miles,
            weather_api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
            weather_api_key: env::var("WEATHER_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            weather_cache_ttl_minutes: parse_var("WEATHER_CACHE_TTL_MINUTES", 30)?,
            tips_seed_path: env::var("TIPS_SEED_PATH").ok().filter(|v| !v.is_empty()),
            risk,
        })
    }
}

/// Read and parse an optional variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => parse_value(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        reason: format!("cannot parse {:?}", raw),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
